//! E2E tests: migrations and catalog queries.

use video_catalog_lib::db::{categories, videos};
use video_catalog_lib::models::NewVideo;
use video_catalog_lib::services::{SeedPlan, run_seed};

use super::test_helpers::*;

#[tokio::test]
async fn test_pending_migrations_before_and_after() {
    let pool = create_unmigrated_pool().await;

    let pending = pool.pending_migrations().await.unwrap();
    assert_eq!(pending.len(), 2);
    assert!(pending[0].ends_with("create_categories"));
    assert!(pending[1].ends_with("create_videos"));

    pool.run_migrations().await.unwrap();
    assert!(pool.pending_migrations().await.unwrap().is_empty());

    // Running again is a no-op.
    pool.run_migrations().await.unwrap();
}

#[tokio::test]
async fn test_reset_schema_empties_tables() {
    let pool = create_test_pool().await;
    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    pool.reset_schema().await.unwrap();

    assert_eq!(categories::count(pool.connection()).await.unwrap(), 0);
    assert_eq!(videos::count(pool.connection()).await.unwrap(), 0);
    assert!(pool.pending_migrations().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_with_categories_orders_by_video_id() {
    let pool = create_test_pool().await;
    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    let entries = videos::list_with_categories(pool.connection())
        .await
        .unwrap();

    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    let expected: Vec<&str> = EXPECTED_CATALOG.iter().map(|(t, _)| *t).collect();
    assert_eq!(titles, expected);
    assert!(entries.windows(2).all(|w| w[0].video_id < w[1].video_id));
}

#[tokio::test]
async fn test_insert_video_into_existing_category() {
    let pool = create_test_pool().await;
    let music = categories::insert(pool.connection(), "Music").await.unwrap();

    let video = videos::insert(
        pool.connection(),
        &NewVideo {
            title: "Drum Basics".to_string(),
            category_id: music.id,
        },
    )
    .await
    .unwrap();

    assert_eq!(video.category_id, music.id);
    assert_eq!(video.title, "Drum Basics");
    assert_eq!(videos::count(pool.connection()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_insert_video_with_unknown_category_fails() {
    let pool = create_test_pool().await;

    let result = videos::insert(
        pool.connection(),
        &NewVideo {
            title: "Nowhere".to_string(),
            category_id: 999,
        },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(videos::count(pool.connection()).await.unwrap(), 0);
}
