//! `vidcat remove <id>` – delete a video from the catalog.

use anyhow::Result;
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::error::CatalogError;

pub async fn run_remove(db: &CatalogDb, id: i64) -> Result<()> {
    if !db.remove_video(id).await? {
        return Err(CatalogError::NotFound(id).into());
    }
    println!("Removed video {id}");
    Ok(())
}
