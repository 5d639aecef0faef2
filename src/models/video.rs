//! Video models.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Video stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub id: i32,
    pub title: String,
    /// Identifier of the owning category (`videos.categories_id`).
    pub category_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a video about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub category_id: i32,
}

/// A video together with the name of its category, as listed by `manage-db list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub video_id: i32,
    pub title: String,
    pub category_id: i32,
    /// `None` only if the referenced category row is missing.
    pub category_name: Option<String>,
}
