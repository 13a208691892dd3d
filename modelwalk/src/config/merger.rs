//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use modelwalk::config::{Config, ConfigMerger};
///
/// let low = Config { view_marker: Some("@@".to_string()), ..Default::default() };
/// let high = Config { view_marker: Some("+".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.view_marker, Some("+".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given lowest precedence first, over `base`.
    #[must_use]
    pub fn merge(base: Config, sources: &[ConfigSource]) -> Config {
        sources.iter().fold(base, |mut result, source| {
            Self::merge_into(&mut result, &source.config);
            result
        })
    }

    /// Merge source config into target; every field set in `source` wins.
    ///
    /// The segment cache setting is replaced as a whole, so a higher layer
    /// choosing `unbounded` does not inherit a lower layer's capacity.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.virtual_root_key.is_some() {
            target.virtual_root_key.clone_from(&source.virtual_root_key);
        }

        if source.view_marker.is_some() {
            target.view_marker.clone_from(&source.view_marker);
        }

        if source.segment_cache.is_some() {
            target.segment_cache = source.segment_cache;
        }

        if source.path_cache_capacity.is_some() {
            target.path_cache_capacity = source.path_cache_capacity;
        }
    }
}
