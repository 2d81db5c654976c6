//! Resource path helpers.
//!
//! TAXII resource paths always end with `/`. Segments are appended to a
//! normalized parent, so both slash helpers are idempotent.
//!
//! Identifiers (collection, object and status ids) are spliced into paths as
//! exactly one segment: [`encode_segment`] escapes every byte that would end
//! the segment or start a query or fragment.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Return `path` trimmed and guaranteed to end with a single `/`.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::with_trailing_slash;
///
/// assert_eq!(with_trailing_slash("/api1"), "/api1/");
/// assert_eq!(with_trailing_slash("/api1/"), "/api1/");
/// ```
pub fn with_trailing_slash(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Return `path` trimmed and without trailing `/`s.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::without_trailing_slash;
///
/// assert_eq!(without_trailing_slash("example.com/"), "example.com");
/// assert_eq!(without_trailing_slash("example.com"), "example.com");
/// ```
pub fn without_trailing_slash(path: &str) -> String {
    let trimmed = path.trim();
    trimmed.trim_end_matches('/').to_string()
}

/// Percent-encode `id` so it stays one path segment.
///
/// # Examples
///
/// ```
/// use taxii2_client::protocol::encode_segment;
///
/// assert_eq!(encode_segment("indicator--8e2e2d2b"), "indicator--8e2e2d2b");
/// assert_eq!(encode_segment("a/b?c#d"), "a%2Fb%3Fc%23d");
/// ```
pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// True when `segment` is `.` or `..`, literally or percent-encoded.
///
/// URL resolution collapses such segments, so they never name a resource.
pub fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// True when any segment in the path part of `path` is a dot segment.
pub fn has_dot_segment(path: &str) -> bool {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split(['/', '\\']).any(is_dot_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_trailing_slash_idempotent() {
        for input in ["", "/", "a", "a/", " /taxii2 ", "https://host/api1/"] {
            let once = with_trailing_slash(input);
            assert_eq!(with_trailing_slash(&once), once);
            assert!(once.ends_with('/'));
        }
    }

    #[test]
    fn test_without_trailing_slash_idempotent() {
        for input in ["", "/", "//", "a", "a/", "a//", " example.com/ ", "example.com//"] {
            let once = without_trailing_slash(input);
            assert_eq!(without_trailing_slash(&once), once);
        }
    }

    #[test]
    fn test_without_trailing_slash_strips_repeats() {
        assert_eq!(without_trailing_slash("example.com//"), "example.com");
        assert_eq!(without_trailing_slash("a///"), "a");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("91a7b528-80eb-42ed-a74d-c6fbd5a26116"), "91a7b528-80eb-42ed-a74d-c6fbd5a26116");
        assert_eq!(encode_segment("../../../admin"), "..%2F..%2F..%2Fadmin");
        assert_eq!(encode_segment("a?x=1"), "a%3Fx=1");
        assert_eq!(encode_segment("indicator--1#frag"), "indicator--1%23frag");
        assert_eq!(encode_segment("50%"), "50%25");
        assert_eq!(encode_segment("a\\b"), "a%5Cb");
        assert_eq!(encode_segment("caf\u{e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_dot_segments() {
        for segment in [".", "..", "%2e", "%2E%2e", ".%2E"] {
            assert!(is_dot_segment(segment), "{}", segment);
        }
        for segment in ["", "...", "a.b", "..%2F..%2Fadmin"] {
            assert!(!is_dot_segment(segment), "{}", segment);
        }
        assert!(has_dot_segment("/api1/collections/c1/objects/../"));
        assert!(has_dot_segment("https://host/api1/%2e%2e/x/"));
        assert!(!has_dot_segment("/api1/collections/c1/objects/..%2Fadmin/"));
        assert!(!has_dot_segment("https://host/api1/?next=../x"));
    }

    #[test]
    fn test_helpers_are_duals() {
        assert_eq!(without_trailing_slash(&with_trailing_slash("abc")), "abc");
        assert_eq!(with_trailing_slash(&without_trailing_slash("abc/")), "abc/");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(with_trailing_slash("  /api1  "), "/api1/");
        assert_eq!(without_trailing_slash("  host/  "), "host");
    }
}
