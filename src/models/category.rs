//! Category models.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Category stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
