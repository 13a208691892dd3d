//! Path segment codec.
//!
//! Converts between percent-encoded, slash-separated path strings and tuples
//! of decoded text segments.
//!
//! # Wire formats
//!
//! - **Path string**: ASCII-safe, percent-encoded UTF-8 segments joined by
//!   `/`. The absolute form starts with `/`.
//! - **Path tuple**: a sequence of decoded segments. The absolute form starts
//!   with an empty segment, so `["", "a", "b"]` joins to `/a/b`.
//!
//! The free functions ([`decode_path`], [`quote_segment`], [`join_segments`])
//! are pure. [`PathCodec`] wraps them with memo caches; a process-wide
//! instance is available through [`PathCodec::shared`].
//!
//! # Examples
//!
//! ```
//! use modelwalk::codec::PathCodec;
//!
//! let codec = PathCodec::new();
//! let segments = codec.decode_path("/archives/La%20Pe%C3%B1a").unwrap();
//! assert_eq!(&segments[..], ["archives", "La Pe\u{f1}a"]);
//!
//! let mut absolute = vec![String::new()];
//! absolute.extend(segments.iter().cloned());
//! assert_eq!(codec.join_segments(&absolute), "/archives/La%20Pe%C3%B1a");
//! ```

mod decode;
mod quote;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::sync::{Arc, OnceLock};

pub use decode::{decode_path, normalize_segments};
pub use quote::{join_segments, quote_bytes, quote_segment, SEGMENT_SAFE};

use crate::cache::{CachePolicy, CacheStats, PathCache};
use crate::config::Config;
use crate::error::Result;

/// An immutable, cheaply clonable tuple of decoded segments.
pub type PathTuple = Arc<[String]>;

/// Cache counters for each of the codec's caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecStats {
    /// Segment-quoting cache.
    pub quoted: CacheStats,
    /// Path decoding cache.
    pub decoded: CacheStats,
    /// Tuple joining cache.
    pub joined: CacheStats,
}

/// Caching front end for the path codec.
///
/// Text and byte segments share one quoting cache keyed by their UTF-8 bytes,
/// so equal content always maps to a single entry.
#[derive(Debug)]
pub struct PathCodec {
    quoted: PathCache<Vec<u8>, String>,
    decoded: PathCache<String, PathTuple>,
    joined: PathCache<Vec<String>, String>,
}

impl PathCodec {
    /// Codec with the default policies: LRU for all three caches.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policies(
            CachePolicy::lru(crate::cache::DEFAULT_SEGMENT_CACHE_CAPACITY),
            CachePolicy::default(),
        )
    }

    /// Codec with explicit policies for the quoting cache and for the
    /// decode/join caches.
    #[must_use]
    pub fn with_policies(segment_policy: CachePolicy, path_policy: CachePolicy) -> Self {
        Self {
            quoted: PathCache::new(segment_policy),
            decoded: PathCache::new(path_policy),
            joined: PathCache::new(path_policy),
        }
    }

    /// Codec built from the cache settings in `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_policies(config.segment_cache_policy(), config.path_cache_policy())
    }

    /// The process-wide codec used by the free-standing helpers.
    #[must_use]
    pub fn shared() -> Arc<PathCodec> {
        static SHARED: OnceLock<Arc<PathCodec>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(PathCodec::new())))
    }

    /// Cached [`decode_path`].
    ///
    /// # Errors
    ///
    /// See [`decode_path`]. Failed decodes are not cached.
    pub fn decode_path(&self, path: &str) -> Result<PathTuple> {
        self.decoded.get_or_try_insert_with(path, || {
            log::trace!("decode cache miss for {path:?}");
            decode_path(path).map(PathTuple::from)
        })
    }

    /// Cached [`quote_segment`].
    #[must_use]
    pub fn quote_segment(&self, segment: &str) -> String {
        self.quote_bytes(segment.as_bytes())
    }

    /// Cached [`quote_bytes`].
    #[must_use]
    pub fn quote_bytes(&self, segment: &[u8]) -> String {
        self.quoted.get_or_insert_with(segment, || quote_bytes(segment))
    }

    /// Cached [`join_segments`], quoting each segment through this codec.
    #[must_use]
    pub fn join_segments(&self, segments: &[String]) -> String {
        self.joined.get_or_insert_with(segments, || {
            let joined = segments
                .iter()
                .map(|s| self.quote_segment(s))
                .collect::<Vec<_>>()
                .join("/");
            if joined.is_empty() {
                "/".to_string()
            } else {
                joined
            }
        })
    }

    /// Cache counters.
    #[must_use]
    pub fn stats(&self) -> CodecStats {
        CodecStats {
            quoted: self.quoted.stats(),
            decoded: self.decoded.stats(),
            joined: self.joined.stats(),
        }
    }
}

impl Default for PathCodec {
    fn default() -> Self {
        Self::new()
    }
}
