//! Business logic services.

pub mod catalog;
pub mod seed;

pub use catalog::catalog_json;
pub use seed::{
    COMPLETION_MESSAGE, SeedPlan, SeedReport, ensure_seed_permitted, reset_and_seed, run_seed,
};
