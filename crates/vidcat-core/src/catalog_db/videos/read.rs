//! Video read operations: list, get, count.

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::super::db::CatalogDb;
use crate::error::CatalogError;
use crate::search::filter_and_sort;
use crate::video::{VideoId, VideoRecord};

fn record_from_row(row: &SqliteRow) -> VideoRecord {
    VideoRecord {
        id: row.get("id"),
        name: row.get("name"),
        url: row.get("url"),
        notes: row.get("notes"),
        video_id: row.get("video_id"),
        created_at: row.get("created_at"),
    }
}

impl CatalogDb {
    /// All videos, newest first.
    pub async fn list_newest_first(&self) -> Result<Vec<VideoRecord>, CatalogError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, url, notes, video_id, created_at
            FROM videos
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(record_from_row).collect())
    }

    /// Videos whose name contains `search_term` (ignoring case), ordered by
    /// name. A missing or blank term lists everything.
    pub async fn list_videos(
        &self,
        search_term: Option<&str>,
    ) -> Result<Vec<VideoRecord>, CatalogError> {
        let all = self.list_newest_first().await?;
        let total = all.len();
        let out = filter_and_sort(all, search_term);
        tracing::debug!(?search_term, total, matched = out.len(), "listed videos");
        Ok(out)
    }

    /// Fetch a single video by id.
    pub async fn get_video(&self, id: VideoId) -> Result<Option<VideoRecord>, CatalogError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, url, notes, video_id, created_at
            FROM videos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(record_from_row))
    }

    pub async fn count_videos(&self) -> Result<i64, CatalogError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM videos")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }
}
