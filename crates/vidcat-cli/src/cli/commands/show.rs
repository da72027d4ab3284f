//! `vidcat show <id>` – print one video's details.

use anyhow::Result;
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::config::CatalogConfig;
use vidcat_core::error::CatalogError;

pub async fn run_show(db: &CatalogDb, cfg: &CatalogConfig, id: i64) -> Result<()> {
    let video = db.get_video(id).await?.ok_or(CatalogError::NotFound(id))?;
    println!("{}", video.summary(cfg.notes_preview_chars));
    Ok(())
}
