//! Splits a URL into its raw, unnormalized components.

/// The pieces of a URL exactly as written in the input.
///
/// Nothing is lowercased, decoded or resolved, so `HTTPS`, `:443`, `\` and
/// `..` survive and can be compared literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawParts<'a> {
    pub scheme: &'a str,
    /// `host[:port]` with any userinfo; empty when there is no `//`.
    pub authority: &'a str,
    pub path: &'a str,
    /// Text between `?` and `#`; `None` when there is no `?`.
    pub query: Option<&'a str>,
}

/// Splits `url` as `scheme:[//authority]path[?query][#fragment]`.
///
/// Returns `None` when there is no `:` to end the scheme.
pub fn split_raw(url: &str) -> Option<RawParts<'_>> {
    let (scheme, rest) = url.split_once(':')?;

    let rest = rest.split_once('#').map_or(rest, |(before, _)| before);
    let (rest, query) = match rest.split_once('?') {
        Some((before, query)) => (before, Some(query)),
        None => (rest, None),
    };

    let (authority, path) = match rest.strip_prefix("//") {
        Some(after) => after.split_at(after.find('/').unwrap_or(after.len())),
        None => ("", rest),
    };

    Some(RawParts {
        scheme,
        authority,
        path,
        query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_watch_url() {
        assert_eq!(
            split_raw("https://www.youtube.com/watch?v=abc&t=1#frag"),
            Some(RawParts {
                scheme: "https",
                authority: "www.youtube.com",
                path: "/watch",
                query: Some("v=abc&t=1"),
            })
        );
    }

    #[test]
    fn keeps_input_verbatim() {
        let parts = split_raw("HTTPS://User@WWW.YouTube.com:443/a/../watch").unwrap();
        assert_eq!(parts.scheme, "HTTPS");
        assert_eq!(parts.authority, "User@WWW.YouTube.com:443");
        assert_eq!(parts.path, "/a/../watch");
        assert_eq!(parts.query, None);
    }

    #[test]
    fn no_double_slash_means_no_authority() {
        let parts = split_raw("https:www.youtube.com/watch?v=abc").unwrap();
        assert_eq!(parts.authority, "");
        assert_eq!(parts.path, "www.youtube.com/watch");

        let parts = split_raw(r"https:\\www.youtube.com\watch?v=abc").unwrap();
        assert_eq!(parts.authority, "");
        assert_eq!(parts.query, Some("v=abc"));
    }

    #[test]
    fn empty_query_and_missing_scheme() {
        assert_eq!(split_raw("https://www.youtube.com/watch?").unwrap().query, Some(""));
        assert_eq!(split_raw("www.youtube.com"), None);
    }
}
