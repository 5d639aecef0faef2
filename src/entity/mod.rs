//! SeaORM entity definitions for the video catalog tables.

pub mod category;
pub mod video;
