//! E2E tests: database contents after a seed run.

use video_catalog_lib::db::{categories, videos};
use video_catalog_lib::services::{SeedPlan, run_seed};

use super::test_helpers::*;

#[tokio::test]
async fn test_seed_creates_exactly_four_categories() {
    let pool = create_test_pool().await;

    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    assert_eq!(categories::count(pool.connection()).await.unwrap(), 4);
    assert_eq!(category_names(&pool).await, expected_category_names());
}

#[tokio::test]
async fn test_seed_links_videos_to_matching_categories() {
    let pool = create_test_pool().await;

    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    assert_eq!(videos::count(pool.connection()).await.unwrap(), 4);
    assert_eq!(catalog_pairs(&pool).await, expected_catalog_pairs());
}

#[tokio::test]
async fn test_seed_report_matches_stored_rows() {
    let pool = create_test_pool().await;

    let report = run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    assert_eq!(report.videos_removed, 0);
    assert_eq!(report.categories_removed, 0);
    assert_eq!(
        report.categories,
        categories::list_all(pool.connection()).await.unwrap()
    );
    assert_eq!(report.videos, videos::list_all(pool.connection()).await.unwrap());

    // Videos are paired with categories by position.
    for (video, category) in report.videos.iter().zip(&report.categories) {
        assert_eq!(video.category_id, category.id);
    }
}

#[tokio::test]
async fn test_seed_replaces_unrelated_rows() {
    let pool = create_test_pool().await;
    let plan = SeedPlan::new()
        .category("Sports")
        .category("News")
        .video("Match Highlights", 0)
        .video("Evening Bulletin", 1)
        .video("Election Night", 1);
    run_seed(&pool, &plan).await.unwrap();

    let report = run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    assert_eq!(report.videos_removed, 3);
    assert_eq!(report.categories_removed, 2);
    assert_eq!(category_names(&pool).await, expected_category_names());
    assert_eq!(catalog_pairs(&pool).await, expected_catalog_pairs());
}

#[tokio::test]
async fn test_find_by_name_after_seed() {
    let pool = create_test_pool().await;
    run_seed(&pool, &SeedPlan::catalog()).await.unwrap();

    let music = categories::find_by_name(pool.connection(), "Music")
        .await
        .unwrap()
        .expect("Music category should exist");
    let guitar = videos::list_all(pool.connection())
        .await
        .unwrap()
        .into_iter()
        .find(|v| v.title == "How to Play Guitar")
        .expect("guitar video should exist");

    assert_eq!(guitar.category_id, music.id);
    assert!(
        categories::find_by_name(pool.connection(), "Sports")
            .await
            .unwrap()
            .is_none()
    );
}
