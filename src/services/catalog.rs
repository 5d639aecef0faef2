//! Catalog listing output.

use crate::error::AppResult;
use crate::models::CatalogEntry;

/// Encode catalog entries as a pretty-printed JSON array.
pub fn catalog_json(entries: &[CatalogEntry]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
