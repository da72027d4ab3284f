//! SQLite-backed catalog database.
//!
//! Handles connection, migrations, and timestamp helpers. Video CRUD lives in `videos`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::CatalogConfig;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed video catalog.
///
/// By default the database file lives under the XDG state directory:
/// `~/.local/state/vidcat/videos.db`.
#[derive(Clone)]
pub struct CatalogDb {
    pub(crate) pool: Pool<Sqlite>,
}

impl CatalogDb {
    /// Open the database named by `cfg.database_path`, or the default one.
    pub async fn open(cfg: &CatalogConfig) -> Result<Self> {
        match &cfg.database_path {
            Some(path) => Self::open_at(path).await,
            None => Self::open_default().await,
        }
    }

    /// Open (or create) the default catalog database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("vidcat")?;
        let db_path = xdg_dirs.get_state_home().join("vidcat").join("videos.db");
        Self::open_at(db_path).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect(&uri)
            .await?;
        let db = CatalogDb { pool };
        db.migrate().await?;
        tracing::debug!(path = %path.display(), "opened catalog database");
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        // `video_id` carries the uniqueness constraint; `add_video` maps its
        // violation to `DuplicateKeyError`.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS videos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                url TEXT NOT NULL,
                notes TEXT,
                video_id TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Current time as Unix seconds (for DB timestamps).
pub(crate) fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<CatalogDb> {
    // Single connection to avoid in-memory pool handing back a different empty DB.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let db = CatalogDb { pool };
    db.migrate().await?;
    Ok(db)
}

#[cfg(test)]
mod uri_tests {
    use super::path_to_sqlite_uri;
    use std::path::Path;

    #[test]
    fn special_chars_escaped() {
        assert_eq!(
            path_to_sqlite_uri(Path::new("/tmp/my videos/#1?.db")),
            "sqlite:///tmp/my%20videos/%231%3F.db"
        );
    }
}
