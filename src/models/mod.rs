//! Domain models for the video catalog.

pub mod category;
pub mod video;

// Re-export commonly used types
pub use category::Category;
pub use video::{CatalogEntry, NewVideo, Video};
