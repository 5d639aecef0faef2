//! Seed service: resets the catalog tables to a fixed set of sample rows.
//!
//! A run removes every video and category, inserts the categories of a
//! [`SeedPlan`] in order, then inserts the videos pointing at the category
//! IDs generated by that run. Everything happens in one transaction, so a
//! failed run leaves the previous rows untouched.

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{DbPool, categories, videos};
use crate::error::{AppError, AppResult};
use crate::models::{Category, NewVideo, Video};

/// Line printed on stdout after a successful run.
pub const COMPLETION_MESSAGE: &str = "Seeding completed successfully!";

/// A video to create, referencing a category by its position in the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedVideo {
    pub title: String,
    pub category_index: usize,
}

/// Rows created by a seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedPlan {
    pub categories: Vec<String>,
    pub videos: Vec<SeedVideo>,
}

impl SeedPlan {
    /// Empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample catalog loaded into development and test databases.
    pub fn catalog() -> Self {
        Self::new()
            .category("Music")
            .category("Education")
            .category("Entertainment")
            .category("Technology")
            .video("How to Play Guitar", 0)
            .video("Ruby on Rails Tutorial", 1)
            .video("Comedy Sketch", 2)
            .video("The Future of AI", 3)
    }

    /// Append a category.
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.categories.push(name.into());
        self
    }

    /// Append a video belonging to the category at `category_index`.
    pub fn video(mut self, title: impl Into<String>, category_index: usize) -> Self {
        self.videos.push(SeedVideo {
            title: title.into(),
            category_index,
        });
        self
    }

    /// Check that every video points at a category in this plan.
    pub fn validate(&self) -> AppResult<()> {
        for v in &self.videos {
            if v.category_index >= self.categories.len() {
                return Err(AppError::InvalidInput(format!(
                    "video '{}' references category #{} but the plan only has {} categories",
                    v.title,
                    v.category_index,
                    self.categories.len()
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of a successful seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub videos_removed: u64,
    pub categories_removed: u64,
    /// Created categories, in plan order.
    pub categories: Vec<Category>,
    /// Created videos, in plan order.
    pub videos: Vec<Video>,
}

/// Refuse to seed where the configuration does not allow destroying data.
pub fn ensure_seed_permitted(config: &Config) -> AppResult<()> {
    if config.seed_permitted() {
        return Ok(());
    }
    Err(AppError::Refused(format!(
        "seeding deletes all catalog rows and is disabled in {}; set VC_ALLOW_PRODUCTION_SEED=true to override",
        config.environment
    )))
}

/// Reset the catalog tables to the contents of `plan`.
pub async fn run_seed(pool: &DbPool, plan: &SeedPlan) -> AppResult<SeedReport> {
    plan.validate()?;

    let txn = pool.connection().begin().await?;

    match apply_plan(&txn, plan).await {
        Ok(report) => {
            txn.commit().await?;
            info!(
                "Seed committed: {} categories, {} videos",
                report.categories.len(),
                report.videos.len()
            );
            Ok(report)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("Failed to roll back seed transaction: {}", rollback_err);
            }
            Err(e)
        }
    }
}

/// Drop and recreate the schema, then load `plan`.
///
/// The guard runs before anything is dropped, so a refused reset leaves the
/// database untouched.
pub async fn reset_and_seed(
    pool: &DbPool,
    config: &Config,
    plan: &SeedPlan,
) -> AppResult<SeedReport> {
    ensure_seed_permitted(config)?;
    plan.validate()?;

    pool.reset_schema().await?;
    run_seed(pool, plan).await
}

async fn apply_plan(txn: &DatabaseTransaction, plan: &SeedPlan) -> AppResult<SeedReport> {
    // Videos first: the foreign key forbids removing referenced categories.
    let videos_removed = videos::delete_all(txn).await?;
    let categories_removed = categories::delete_all(txn).await?;
    info!(
        "Cleared existing data ({} videos, {} categories)",
        videos_removed, categories_removed
    );

    let mut created_categories = Vec::with_capacity(plan.categories.len());
    for name in &plan.categories {
        let category = categories::insert(txn, name).await?;
        info!("Created category '{}' (id {})", category.name, category.id);
        created_categories.push(category);
    }

    let mut created_videos = Vec::with_capacity(plan.videos.len());
    for v in &plan.videos {
        let category = &created_categories[v.category_index];
        let video = videos::insert(
            txn,
            &NewVideo {
                title: v.title.clone(),
                category_id: category.id,
            },
        )
        .await?;
        info!(
            "Created video '{}' (id {}) in '{}'",
            video.title, video.id, category.name
        );
        created_videos.push(video);
    }

    Ok(SeedReport {
        videos_removed,
        categories_removed,
        categories: created_categories,
        videos: created_videos,
    })
}
