//! Configuration schema definitions.
//!
//! Every field is optional so that partial configurations from files and the
//! environment can be layered; the accessor methods supply the defaults.

use serde::{Deserialize, Serialize};

use crate::cache::{CachePolicy, DEFAULT_PATH_CACHE_CAPACITY, DEFAULT_SEGMENT_CACHE_CAPACITY};
use crate::environ::VH_ROOT_KEY;
use crate::traversal::VIEW_MARKER;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use modelwalk::config::{Config, SegmentCacheConfig};
///
/// let config: Config = serde_yaml::from_str(
///     "view_marker: '+'\nsegment_cache:\n  policy: unbounded\n",
/// ).unwrap();
/// assert_eq!(config.view_marker(), "+");
/// assert_eq!(config.segment_cache, Some(SegmentCacheConfig::Unbounded));
/// assert_eq!(config.virtual_root_key(), "HTTP_X_VHM_ROOT");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Environment key carrying the virtual-root path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_root_key: Option<String>,

    /// Prefix marking a path segment as an explicit view name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_marker: Option<String>,

    /// Eviction policy of the segment-quoting cache.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment_cache: Option<SegmentCacheConfig>,

    /// Capacity of the path decoding and joining caches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_cache_capacity: Option<usize>,
}

/// Segment-quoting cache policy as written in configuration files.
///
/// ```yaml
/// segment_cache:
///   policy: lru
///   capacity: 5000
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum SegmentCacheConfig {
    /// Keep every quoted segment.
    Unbounded,
    /// Evict the least recently used segment beyond `capacity`.
    Lru {
        /// Maximum number of cached segments.
        capacity: usize,
    },
}

impl Default for SegmentCacheConfig {
    fn default() -> Self {
        Self::Lru {
            capacity: DEFAULT_SEGMENT_CACHE_CAPACITY,
        }
    }
}

impl From<SegmentCacheConfig> for CachePolicy {
    fn from(value: SegmentCacheConfig) -> Self {
        match value {
            SegmentCacheConfig::Unbounded => CachePolicy::Unbounded,
            SegmentCacheConfig::Lru { capacity } => CachePolicy::lru(capacity),
        }
    }
}

impl Config {
    /// A configuration with every field set to its default.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            virtual_root_key: Some(VH_ROOT_KEY.to_string()),
            view_marker: Some(VIEW_MARKER.to_string()),
            segment_cache: Some(SegmentCacheConfig::default()),
            path_cache_capacity: Some(DEFAULT_PATH_CACHE_CAPACITY),
        }
    }

    /// The virtual-root environment key, or its default.
    #[must_use]
    pub fn virtual_root_key(&self) -> &str {
        self.virtual_root_key.as_deref().unwrap_or(VH_ROOT_KEY)
    }

    /// The view-marker prefix, or its default.
    #[must_use]
    pub fn view_marker(&self) -> &str {
        self.view_marker.as_deref().unwrap_or(VIEW_MARKER)
    }

    /// Policy for the segment-quoting cache.
    #[must_use]
    pub fn segment_cache_policy(&self) -> CachePolicy {
        self.segment_cache.unwrap_or_default().into()
    }

    /// Policy for the path decoding and joining caches.
    #[must_use]
    pub fn path_cache_policy(&self) -> CachePolicy {
        CachePolicy::lru(self.path_cache_capacity.unwrap_or(DEFAULT_PATH_CACHE_CAPACITY))
    }
}
