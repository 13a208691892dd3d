//! Decoding of slash-separated path strings into segment tuples.
//!
//! Rules applied to every segment, in order:
//! - the segment is percent-decoded to bytes
//! - empty segments and `.` are dropped
//! - `..` removes the most recently accumulated segment
//! - anything else must be valid UTF-8 and is appended

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::error::{Error, Result};

/// Decode a `PATH_INFO`-style string into its normalized segments.
///
/// Leading and trailing slashes are ignored, so absolute and relative forms
/// decode identically.
///
/// # Errors
///
/// Returns [`Error::Decode`] if a segment is not valid UTF-8 once
/// percent-decoded, and [`Error::MalformedPath`] if a `..` segment has nothing
/// left to remove.
///
/// # Examples
///
/// ```
/// use modelwalk::codec::decode_path;
///
/// assert!(decode_path("/").unwrap().is_empty());
/// assert_eq!(decode_path("/foo//bar/baz/..").unwrap(), vec!["foo", "bar"]);
/// assert_eq!(
///     decode_path("/my%20archives/hello").unwrap(),
///     vec!["my archives", "hello"]
/// );
/// assert!(decode_path("/../..").is_err());
/// ```
pub fn decode_path(path: &str) -> Result<Vec<String>> {
    let mut clean: Vec<String> = Vec::new();

    for raw in path.trim_matches('/').split('/') {
        let bytes: Cow<'_, [u8]> = percent_decode_str(raw).into();
        match bytes.as_ref() {
            b"" | b"." => {}
            b".." => {
                if clean.pop().is_none() {
                    return Err(Error::MalformedPath {
                        path: path.to_string(),
                    });
                }
            }
            decoded => {
                let segment = std::str::from_utf8(decoded).map_err(|e| Error::Decode {
                    segment: raw.to_string(),
                    reason: e.to_string(),
                })?;
                clean.push(segment.to_string());
            }
        }
    }

    Ok(clean)
}

/// Normalize a sequence of already-decoded segments.
///
/// No splitting or percent-decoding takes place; only the empty, `.` and `..`
/// rules are applied.
///
/// # Errors
///
/// Returns [`Error::MalformedPath`] if a `..` segment has nothing left to
/// remove.
///
/// # Examples
///
/// ```
/// use modelwalk::codec::normalize_segments;
///
/// let segments = normalize_segments(["a", "", ".", "b", "..", "c%20d"]).unwrap();
/// assert_eq!(segments, vec!["a", "c%20d"]);
/// ```
pub fn normalize_segments<I, S>(segments: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut clean: Vec<String> = Vec::new();

    for segment in segments {
        let segment = segment.as_ref();
        seen.push(segment.to_string());
        match segment {
            "" | "." => {}
            ".." => {
                if clean.pop().is_none() {
                    return Err(Error::MalformedPath {
                        path: seen.join("/"),
                    });
                }
            }
            other => clean.push(other.to_string()),
        }
    }

    Ok(clean)
}
