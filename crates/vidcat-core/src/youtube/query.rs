//! Strict `key=value` query string parsing.

use url::form_urlencoded;

/// A query string field that is not a `key=value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedQuery {
    /// Zero-based position of the bad field among `&`-separated fields.
    pub field_index: usize,
}

/// Parses `query` (without the leading `?`) into decoded name/value pairs.
///
/// Every `&`-separated field must contain `=`; an empty field (from `&&`, a
/// leading or trailing `&`) is rejected. Names and values are
/// form-urlencoded. Pairs whose value is empty are dropped, so `v=` does not
/// produce a `v` entry.
pub fn parse_strict(query: &str) -> Result<Vec<(String, String)>, MalformedQuery> {
    let mut pairs = Vec::new();
    for (field_index, field) in query.split('&').enumerate() {
        let Some((_, raw_value)) = field.split_once('=') else {
            return Err(MalformedQuery { field_index });
        };
        if raw_value.is_empty() {
            continue;
        }
        if let Some((name, value)) = form_urlencoded::parse(field.as_bytes()).next() {
            pairs.push((name.into_owned(), value.into_owned()));
        }
    }
    Ok(pairs)
}

/// Returns the first value for `key`, if any.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
