//! E2E tests: failed runs never leave videos without their categories.

use video_catalog_lib::db::{categories, videos};
use video_catalog_lib::error::AppError;
use video_catalog_lib::services::{SeedPlan, run_seed};

use super::test_helpers::*;

#[tokio::test]
async fn test_failed_category_insert_creates_no_videos() {
    let pool = create_test_pool().await;
    reject_category_inserts(&pool).await;

    let result = run_seed(&pool, &SeedPlan::catalog()).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(videos::count(pool.connection()).await.unwrap(), 0);
    assert_eq!(categories::count(pool.connection()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_run_keeps_previous_rows() {
    let pool = create_test_pool().await;
    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();
    let before = videos::list_all(pool.connection()).await.unwrap();

    reject_category_inserts(&pool).await;
    let result = run_seed(&pool, &SeedPlan::catalog()).await;

    assert!(result.is_err());
    assert_eq!(videos::list_all(pool.connection()).await.unwrap(), before);
    assert_eq!(category_names(&pool).await, expected_category_names());
    assert_eq!(catalog_pairs(&pool).await, expected_catalog_pairs());
}

#[tokio::test]
async fn test_invalid_plan_touches_nothing() {
    let pool = create_test_pool().await;
    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    let plan = SeedPlan::new().category("Music").video("Lost Video", 3);
    let result = run_seed(&pool, &plan).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(categories::count(pool.connection()).await.unwrap(), 4);
    assert_eq!(videos::count(pool.connection()).await.unwrap(), 4);
}

#[tokio::test]
async fn test_categories_with_videos_cannot_be_deleted() {
    let pool = create_test_pool().await;
    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    let result = categories::delete_all(pool.connection()).await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(categories::count(pool.connection()).await.unwrap(), 4);
}

#[tokio::test]
async fn test_seed_without_schema_fails() {
    let pool = create_unmigrated_pool().await;

    let result = run_seed(&pool, &SeedPlan::catalog()).await;

    assert!(matches!(result, Err(AppError::Database(_))));
}
