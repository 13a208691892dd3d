//! Percent-encoding of individual segments and joining of segment tuples.

use percent_encoding::{percent_encode, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped in a quoted segment: ASCII letters, digits and `_.-`.
///
/// Everything else, including `/`, is percent-encoded so that a quoted
/// segment never introduces a segment boundary.
pub const SEGMENT_SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'.').remove(b'-');

/// Percent-encode one decoded segment as UTF-8.
///
/// # Examples
///
/// ```
/// use modelwalk::codec::quote_segment;
///
/// assert_eq!(quote_segment("La Pe\u{f1}a"), "La%20Pe%C3%B1a");
/// assert_eq!(quote_segment("a/b"), "a%2Fb");
/// assert_eq!(quote_segment("plain-name_1.txt"), "plain-name_1.txt");
/// ```
#[must_use]
pub fn quote_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_SAFE).to_string()
}

/// Percent-encode a raw byte segment directly.
///
/// # Examples
///
/// ```
/// use modelwalk::codec::quote_bytes;
///
/// assert_eq!(quote_bytes(b"\xff a"), "%FF%20a");
/// ```
#[must_use]
pub fn quote_bytes(segment: &[u8]) -> String {
    percent_encode(segment, SEGMENT_SAFE).to_string()
}

/// Join segments into a quoted path string without caching.
///
/// An empty sequence, or one that joins to nothing, yields `/`. A leading
/// empty segment produces the leading `/` of an absolute path.
///
/// # Examples
///
/// ```
/// use modelwalk::codec::join_segments;
///
/// assert_eq!(join_segments::<&str>(&[]), "/");
/// assert_eq!(join_segments(&["", "foo", "bar"]), "/foo/bar");
/// assert_eq!(join_segments(&["foo", "bar"]), "foo/bar");
/// ```
#[must_use]
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    let joined = segments
        .iter()
        .map(|s| quote_segment(s.as_ref()))
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}
