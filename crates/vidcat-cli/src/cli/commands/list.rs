//! `vidcat list [search]` – list videos alphabetically, optionally filtered.

use anyhow::Result;
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::config::CatalogConfig;

pub async fn run_list(
    db: &CatalogDb,
    cfg: &CatalogConfig,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let videos = db.list_videos(search).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&videos)?);
        return Ok(());
    }

    println!("{}", cfg.app_name);
    if videos.is_empty() {
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => println!("No videos matching \"{term}\"."),
            None => println!("No videos in catalog."),
        }
    } else {
        println!("{:<6} {:<14} {:<40} {}", "ID", "VIDEO", "NAME", "URL");
        for v in videos {
            println!("{:<6} {:<14} {:<40} {}", v.id, v.video_id, v.name, v.url);
        }
    }
    Ok(())
}
