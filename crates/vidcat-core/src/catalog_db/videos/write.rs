//! Video write operations: add, remove.

use super::super::db::{unix_timestamp, CatalogDb};
use crate::error::{CatalogError, DuplicateKeyError};
use crate::video::{NewVideo, VideoId};

impl CatalogDb {
    /// Insert a validated video and return its id.
    ///
    /// Fails with [`CatalogError::DuplicateKey`] if a video with the same
    /// `video_id` is already stored; the catalog is left unchanged.
    pub async fn add_video(&self, video: &NewVideo) -> Result<VideoId, CatalogError> {
        let now = unix_timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO videos (name, url, notes, video_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(video.name())
        .bind(video.url())
        .bind(video.notes())
        .bind(video.video_id())
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                tracing::info!(id, video_id = video.video_id(), "added video");
                Ok(id)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                tracing::info!(video_id = video.video_id(), "duplicate video rejected");
                Err(DuplicateKeyError {
                    video_id: video.video_id().to_string(),
                }
                .into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Permanently remove a video. Returns false if no video had this id.
    pub async fn remove_video(&self, id: VideoId) -> Result<bool, CatalogError> {
        let done = sqlx::query(
            r#"
            DELETE FROM videos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        let removed = done.rows_affected() > 0;
        tracing::info!(id, removed, "remove video");
        Ok(removed)
    }
}
