//! YouTube watch URL validation and video id extraction.
//!
//! Only canonical desktop watch URLs are accepted:
//! `https://www.youtube.com/watch?v=<id>[&...]`. Short links, mobile hosts and
//! embeds are rejected.

mod query;
mod split;

pub use query::{first_value, parse_strict, MalformedQuery};
pub use split::{split_raw, RawParts};

use crate::error::{ValidationError, ValidationErrorKind};
use url::Url;

pub const REQUIRED_SCHEME: &str = "https";
pub const REQUIRED_HOST: &str = "www.youtube.com";
pub const REQUIRED_PATH: &str = "/watch";
/// Query parameter holding the video id.
pub const VIDEO_ID_PARAM: &str = "v";

/// Validates `url` as a YouTube watch URL and returns its video id.
///
/// Scheme, host and path are compared against the input as written, so
/// case changes, explicit ports, backslashes, dot segments and surrounding
/// whitespace are all rejected; `url::Url` only checks that the input is a
/// well-formed URL. The id is the first non-empty value of the `v` query
/// parameter. Every failure carries `url` unchanged.
///
/// # Examples
///
/// - `extract_video_id("https://www.youtube.com/watch?v=ZxJ0A5xcqEI")` → `Ok("ZxJ0A5xcqEI")`
/// - `extract_video_id("https://www.youtube.com/watch?v=")` → `Err(MissingVideoId)`
pub fn extract_video_id(url: &str) -> Result<String, ValidationError> {
    let fail = |kind| ValidationError::new(kind, url);

    if url.trim() != url {
        return Err(fail(ValidationErrorKind::Unparseable));
    }
    Url::parse(url).map_err(|_| fail(ValidationErrorKind::Unparseable))?;
    let raw = split_raw(url).ok_or_else(|| fail(ValidationErrorKind::Unparseable))?;

    if raw.scheme != REQUIRED_SCHEME {
        return Err(fail(ValidationErrorKind::Scheme));
    }
    if raw.authority != REQUIRED_HOST {
        return Err(fail(ValidationErrorKind::Host));
    }
    if raw.path != REQUIRED_PATH {
        return Err(fail(ValidationErrorKind::Path));
    }

    let query = raw.query.unwrap_or_default();
    if query.is_empty() {
        return Err(fail(ValidationErrorKind::EmptyQuery));
    }

    let pairs = parse_strict(query).map_err(|e| {
        tracing::debug!(url, field_index = e.field_index, "malformed query string");
        fail(ValidationErrorKind::MalformedQuery)
    })?;

    first_value(&pairs, VIDEO_ID_PARAM)
        .map(str::to_string)
        .ok_or_else(|| fail(ValidationErrorKind::MissingVideoId))
}
