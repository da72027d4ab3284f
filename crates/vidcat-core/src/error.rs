//! Error types for the catalog.
//!
//! `ValidationError` and `DuplicateKeyError` are the two user-facing failures of
//! adding a video; `CatalogError` wraps them together with store failures.

use thiserror::Error;

/// Why a URL was rejected by [`crate::youtube::extract_video_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// URL could not be parsed at all, or has surrounding whitespace.
    Unparseable,
    /// Scheme is not `https`.
    Scheme,
    /// Host is not `www.youtube.com` (or carries a port/userinfo).
    Host,
    /// Path is not `/watch`.
    Path,
    /// No query string, or an empty one.
    EmptyQuery,
    /// Query string failed strict `key=value` parsing.
    MalformedQuery,
    /// Query parsed but has no non-empty `v` value.
    MissingVideoId,
}

impl ValidationErrorKind {
    /// Message prefix shown before the offending URL.
    pub fn prefix(self) -> &'static str {
        match self {
            ValidationErrorKind::Unparseable
            | ValidationErrorKind::Scheme
            | ValidationErrorKind::Host
            | ValidationErrorKind::Path => "Not a YouTube URL",
            ValidationErrorKind::EmptyQuery | ValidationErrorKind::MalformedQuery => {
                "Invalid YouTube URL"
            }
            ValidationErrorKind::MissingVideoId => "Invalid YouTube URL, missing parameters",
        }
    }
}

/// A submitted URL is not a usable YouTube watch URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {url}", .kind.prefix())]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    /// The offending URL, exactly as submitted.
    pub url: String,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

/// A video with the same `video_id` is already stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("video {video_id} is already in the catalog")]
pub struct DuplicateKeyError {
    pub video_id: String,
}

/// A non-URL form field is missing or too long.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

/// Errors surfaced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    #[error(transparent)]
    Field(#[from] FieldError),

    /// No video with this id.
    #[error("no video with id {0}")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_carry_url() {
        let url = "https://www.github.com";
        let e = ValidationError::new(ValidationErrorKind::Host, url);
        assert_eq!(e.to_string(), "Not a YouTube URL https://www.github.com");

        let e = ValidationError::new(ValidationErrorKind::EmptyQuery, "https://www.youtube.com/watch?");
        assert_eq!(e.to_string(), "Invalid YouTube URL https://www.youtube.com/watch?");

        let e = ValidationError::new(
            ValidationErrorKind::MissingVideoId,
            "https://www.youtube.com/watch?abc=123",
        );
        assert_eq!(
            e.to_string(),
            "Invalid YouTube URL, missing parameters https://www.youtube.com/watch?abc=123"
        );
    }

    #[test]
    fn catalog_error_is_transparent_for_domain_errors() {
        let e: CatalogError = DuplicateKeyError {
            video_id: "ZxJ0A5xcqEI".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "video ZxJ0A5xcqEI is already in the catalog");
        assert!(matches!(e, CatalogError::DuplicateKey(_)));
    }
}
