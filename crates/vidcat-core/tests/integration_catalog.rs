//! Integration test: on-disk catalog survives reopening, and failed adds
//! leave it unchanged.

use tempfile::tempdir;
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::config::CatalogConfig;
use vidcat_core::error::CatalogError;
use vidcat_core::video::validate_new_video;

#[tokio::test]
async fn catalog_persists_across_reopen() {
    let state_dir = tempdir().unwrap();
    let db_path = state_dir.path().join("nested").join("videos.db");
    let cfg = CatalogConfig {
        database_path: Some(db_path.clone()),
        ..CatalogConfig::default()
    };

    let db = CatalogDb::open(&cfg).await.unwrap();
    let new = validate_new_video(
        "New Horse Shopping",
        "https://www.youtube.com/watch?v=ZxJ0A5xcqEI",
        Some("New Horse Shopping"),
    )
    .unwrap();
    let id = db.add_video(&new).await.unwrap();
    drop(db);

    assert!(db_path.exists());
    let reopened = CatalogDb::open_at(&db_path).await.unwrap();
    let videos = reopened.list_videos(Some("horse")).await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, id);
    assert_eq!(videos[0].video_id, "ZxJ0A5xcqEI");
}

#[tokio::test]
async fn rejected_submissions_do_not_touch_the_catalog() {
    let state_dir = tempdir().unwrap();
    let db = CatalogDb::open_at(state_dir.path().join("videos.db"))
        .await
        .unwrap();

    let invalid_urls = [
        "https://www.youtube.com/watch",
        "https://www.youtube.com/watch?",
        "https://www.youtube.com/watch?abc=123",
        "https://www.youtube.com/watch?v=",
        "https://www.github.com",
        "https://www.minneapolis.edu",
        "https://www.minneapolis.edu/watch?v=ZxJ0A5xcqEI",
    ];
    for url in invalid_urls {
        match validate_new_video("example", url, Some("example notes")) {
            Err(CatalogError::Validation(e)) => assert_eq!(e.url, url),
            other => panic!("expected validation failure for {url}, got {other:?}"),
        }
    }
    assert_eq!(db.count_videos().await.unwrap(), 0);

    let ok = validate_new_video("example", "https://www.youtube.com/watch?v=abc", None).unwrap();
    db.add_video(&ok).await.unwrap();
    assert!(matches!(
        db.add_video(&ok).await,
        Err(CatalogError::DuplicateKey(_))
    ));
    assert_eq!(db.count_videos().await.unwrap(), 1);
}
