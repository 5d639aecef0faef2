//! Database operations for videos using SeaORM.

use chrono::Utc;
use sea_orm::*;

use crate::entity::{category, video};
use crate::error::AppResult;
use crate::models::{CatalogEntry, NewVideo, Video};

/// Insert a video and return it with its generated ID.
///
/// The referenced category must already exist.
pub async fn insert<C: ConnectionTrait>(db: &C, new: &NewVideo) -> AppResult<Video> {
    let now = Utc::now();

    let model = video::ActiveModel {
        title: Set(new.title.clone()),
        categories_id: Set(new.category_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    Ok(model_to_video(inserted))
}

/// Delete every video. Returns the number of rows removed.
pub async fn delete_all<C: ConnectionTrait>(db: &C) -> AppResult<u64> {
    let result = video::Entity::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}

/// List all videos in insertion order.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Video>> {
    let results = video::Entity::find()
        .order_by_asc(video::Column::Id)
        .all(db)
        .await?;

    Ok(results.into_iter().map(model_to_video).collect())
}

/// List every video joined with its category.
pub async fn list_with_categories<C: ConnectionTrait>(db: &C) -> AppResult<Vec<CatalogEntry>> {
    let rows = video::Entity::find()
        .find_also_related(category::Entity)
        .order_by_asc(video::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(v, c)| CatalogEntry {
            video_id: v.id,
            title: v.title,
            category_id: v.categories_id,
            category_name: c.map(|c| c.name),
        })
        .collect())
}

/// Count video rows.
pub async fn count<C: ConnectionTrait>(db: &C) -> AppResult<u64> {
    Ok(video::Entity::find().count(db).await?)
}

fn model_to_video(m: video::Model) -> Video {
    Video {
        id: m.id,
        title: m.title,
        category_id: m.categories_id,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
