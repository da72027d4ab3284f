//! Video records and the validation that runs before a record is stored.
//!
//! Callers build a [`NewVideo`] through [`validate_new_video`]; the database
//! only accepts that type, so nothing unvalidated reaches it.

use serde::Serialize;
use std::fmt;

use crate::error::{CatalogError, FieldError};
use crate::youtube::extract_video_id;

/// Video identifier assigned by the store.
pub type VideoId = i64;

pub const MAX_NAME_CHARS: usize = 200;
pub const MAX_URL_CHARS: usize = 400;

/// A stored video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoRecord {
    pub id: VideoId,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    /// YouTube id derived from `url` when the record was created.
    pub video_id: String,
    /// Unix seconds.
    pub created_at: i64,
}

impl VideoRecord {
    /// One-line summary, with notes cut to `notes_chars` characters.
    pub fn summary(&self, notes_chars: usize) -> String {
        let notes: String = self
            .notes
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(notes_chars)
            .collect();
        format!(
            "ID: {}, Name: {}, URL: {}, Notes: {}",
            self.id, self.name, self.url, notes
        )
    }
}

impl fmt::Display for VideoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(200))
    }
}

/// A validated video that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    name: String,
    url: String,
    notes: Option<String>,
    video_id: String,
}

impl NewVideo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }
}

/// Checks the submitted fields and derives the video id from `url`.
///
/// `name` is trimmed and must be non-empty; blank `notes` become `None`. The
/// URL is taken as submitted (no trimming), checked for length, then with
/// [`extract_video_id`].
pub fn validate_new_video(
    name: &str,
    url: &str,
    notes: Option<&str>,
) -> Result<NewVideo, CatalogError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(field_error("name", "this field is required").into());
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(field_error("name", format!("at most {MAX_NAME_CHARS} characters")).into());
    }

    if url.chars().count() > MAX_URL_CHARS {
        return Err(field_error("url", format!("at most {MAX_URL_CHARS} characters")).into());
    }
    let video_id = extract_video_id(url)?;

    let notes = notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(NewVideo {
        name: name.to_string(),
        url: url.to_string(),
        notes,
        video_id,
    })
}

fn field_error(field: &'static str, reason: impl Into<String>) -> FieldError {
    FieldError {
        field,
        reason: reason.into(),
    }
}
