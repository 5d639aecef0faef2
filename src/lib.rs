//! Video catalog database library.
//!
//! Provides the SeaORM entities and migrations for the catalog tables,
//! typed queries over them, and the seed service that loads the sample
//! catalog.

pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod logging;
pub mod migration;
pub mod models;
pub mod services;
