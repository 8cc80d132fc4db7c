//! Redirect target resolution.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped when a target is rendered into a `Location` header:
/// control bytes (invalid in any header value) plus the printable
/// characters a URI cannot carry raw. `%` is not in the set, so escapes
/// already present in the stored value pass through unchanged.
const LOCATION_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Builds the redirect target for a stored URL.
///
/// Stored values are kept verbatim; when one starts with neither `http://`
/// nor `https://` (exact, case-sensitive prefixes), `http://` is prepended
/// here at read time. Header-unsafe bytes are percent-encoded so the result
/// is always a valid `Location` value. The stored record is never rewritten.
pub fn redirect_target(original_url: &str) -> String {
    let encoded = utf8_percent_encode(original_url, LOCATION_ENCODE_SET);

    if original_url.starts_with("http://") || original_url.starts_with("https://") {
        encoded.to_string()
    } else {
        format!("http://{encoded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_scheme_when_missing() {
        assert_eq!(
            redirect_target("example.com/page"),
            "http://example.com/page"
        );
    }

    #[test]
    fn test_keeps_http_unchanged() {
        assert_eq!(
            redirect_target("http://example.com/page"),
            "http://example.com/page"
        );
    }

    #[test]
    fn test_keeps_https_unchanged() {
        assert_eq!(
            redirect_target("https://example.com/page"),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_query_and_path_are_preserved_verbatim() {
        assert_eq!(
            redirect_target("example.com/a?b=c&d=e"),
            "http://example.com/a?b=c&d=e"
        );
    }

    #[test]
    fn test_control_bytes_are_percent_encoded() {
        assert_eq!(
            redirect_target("https://example.com/a\nb"),
            "https://example.com/a%0Ab"
        );
    }

    #[test]
    fn test_header_unsafe_printables_are_percent_encoded() {
        assert_eq!(
            redirect_target("https://example.com/a b\"c"),
            "https://example.com/a%20b%22c"
        );
    }

    #[test]
    fn test_existing_escapes_are_not_double_encoded() {
        assert_eq!(
            redirect_target("https://example.com/a%20b?q=1"),
            "https://example.com/a%20b?q=1"
        );
    }

    #[test]
    fn test_non_ascii_is_encoded_as_utf8_bytes() {
        assert_eq!(
            redirect_target("https://example.com/héllo"),
            "https://example.com/h%C3%A9llo"
        );
    }

    #[test]
    fn test_scheme_prefix_and_escaping_compose() {
        assert_eq!(
            redirect_target("example.com/a b"),
            "http://example.com/a%20b"
        );
    }
}
