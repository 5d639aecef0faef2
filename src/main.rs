//! Seed entry point.
//!
//! Clears the `videos` and `categories` tables and loads the sample catalog.
//! Takes no arguments; the database is selected through `DATABASE_URL`.

use tracing::info;

use video_catalog_lib::config::Config;
use video_catalog_lib::db::DbPool;
use video_catalog_lib::error::AppResult;
use video_catalog_lib::logging;
use video_catalog_lib::services::{self, SeedPlan};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    logging::init();

    if let Err(e) = seed().await {
        eprintln!("Seeding failed: {}", e);
        std::process::exit(1);
    }

    println!("{}", services::COMPLETION_MESSAGE);
}

async fn seed() -> AppResult<()> {
    let config = Config::from_env()?;
    info!("Environment: {}", config.environment);

    services::ensure_seed_permitted(&config)?;

    let pool = DbPool::new(&config).await?;
    let report = services::run_seed(&pool, &SeedPlan::catalog()).await?;
    info!(
        "Loaded {} categories and {} videos",
        report.categories.len(),
        report.videos.len()
    );

    pool.close().await
}
