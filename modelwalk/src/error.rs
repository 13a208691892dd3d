//! Error types for the modelwalk library.
//!
//! Every fallible operation in the crate returns [`Result`]. Traversal itself
//! never fails on a missing child; the variants here cover undecodable or
//! malformed paths, unresolvable model paths and configuration problems.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a modelwalk error.
///
/// # Examples
///
/// ```
/// use modelwalk::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the modelwalk library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path segment could not be decoded as UTF-8 after percent-decoding.
    #[error("could not decode path segment {segment:?} using UTF-8: {reason}")]
    Decode {
        /// The raw (still percent-encoded) segment.
        segment: String,
        /// Why decoding failed.
        reason: String,
    },

    /// A `..` segment tried to remove a segment from an empty accumulator.
    #[error("malformed path {path:?}: '..' escapes the start of the path")]
    MalformedPath {
        /// The path that was being decoded.
        path: String,
    },

    /// A model path did not resolve to an exact node.
    #[error("{context} has no subelement {view_name}")]
    NotFound {
        /// Canonical path of the deepest node that was reached.
        context: String,
        /// The first segment that could not be resolved.
        view_name: String,
    },

    /// A configuration or model tree file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending file path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// YAML could not be parsed.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if the error is a lookup failure from [`find_model`](crate::find_model).
    ///
    /// # Examples
    ///
    /// ```
    /// use modelwalk::Error;
    ///
    /// let err = Error::NotFound { context: "/a/".into(), view_name: "b".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if the error was caused by bad client input in a request path.
    ///
    /// The HTTP layer is expected to translate these into a client error.
    #[must_use]
    pub fn is_bad_path(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::MalformedPath { .. })
    }
}
