//! `vidcat add <url> --name <name>` – validate and store a video.

use anyhow::{anyhow, Result};
use vidcat_core::catalog_db::CatalogDb;
use vidcat_core::error::CatalogError;
use vidcat_core::video::validate_new_video;

const CHECK_DATA: &str = "Please check the data entered.";

pub async fn run_add(db: &CatalogDb, name: &str, url: &str, notes: Option<&str>) -> Result<()> {
    let video = validate_new_video(name, url, notes).map_err(rejection)?;
    let id = db.add_video(&video).await.map_err(rejection)?;
    println!("New video saved! (ID {id}, video {})", video.video_id());
    Ok(())
}

/// Turns a domain error into the message shown to the user.
fn rejection(err: CatalogError) -> anyhow::Error {
    match err {
        CatalogError::Validation(e) => {
            tracing::info!(url = %e.url, kind = ?e.kind, "rejected url");
            anyhow!("{e}\n{CHECK_DATA}")
        }
        CatalogError::Field(e) => anyhow!("{e}\n{CHECK_DATA}"),
        CatalogError::DuplicateKey(e) => anyhow!("You already added video {}", e.video_id),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidcat_core::error::{DuplicateKeyError, ValidationError, ValidationErrorKind};

    #[test]
    fn validation_rejection_asks_to_check_data() {
        let err = rejection(
            ValidationError::new(ValidationErrorKind::MissingVideoId, "https://www.youtube.com/watch?v=")
                .into(),
        );
        assert_eq!(
            err.to_string(),
            "Invalid YouTube URL, missing parameters https://www.youtube.com/watch?v=\n\
             Please check the data entered."
        );
    }

    #[test]
    fn duplicate_rejection_names_video() {
        let err = rejection(
            DuplicateKeyError {
                video_id: "ZxJ0A5xcqEI".to_string(),
            }
            .into(),
        );
        assert_eq!(err.to_string(), "You already added video ZxJ0A5xcqEI");
    }
}
