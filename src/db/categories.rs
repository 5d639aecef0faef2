//! Database operations for categories using SeaORM.

use chrono::Utc;
use sea_orm::*;

use crate::entity::category;
use crate::error::AppResult;
use crate::models::Category;

/// Insert a category and return it with its generated ID.
pub async fn insert<C: ConnectionTrait>(db: &C, name: &str) -> AppResult<Category> {
    let now = Utc::now();

    let model = category::ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    Ok(model_to_category(inserted))
}

/// Delete every category. Returns the number of rows removed.
///
/// Fails if any video still references a category.
pub async fn delete_all<C: ConnectionTrait>(db: &C) -> AppResult<u64> {
    let result = category::Entity::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}

/// List all categories in insertion order.
pub async fn list_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Category>> {
    let results = category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(db)
        .await?;

    Ok(results.into_iter().map(model_to_category).collect())
}

/// Find the first category with the given name.
pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> AppResult<Option<Category>> {
    let result = category::Entity::find()
        .filter(category::Column::Name.eq(name))
        .order_by_asc(category::Column::Id)
        .one(db)
        .await?;

    Ok(result.map(model_to_category))
}

/// Count category rows.
pub async fn count<C: ConnectionTrait>(db: &C) -> AppResult<u64> {
    Ok(category::Entity::find().count(db).await?)
}

fn model_to_category(m: category::Model) -> Category {
    Category {
        id: m.id,
        name: m.name,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
