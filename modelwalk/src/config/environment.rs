//! Environment variable handling for configuration overrides.
//!
//! This module provides support for MODELWALK_* environment variables that
//! override configuration file values.

use crate::config::schema::{Config, SegmentCacheConfig};
use crate::error::{Error, Result};
use std::env;

/// Overrides [`Config::virtual_root_key`].
pub const ENV_VIRTUAL_ROOT_KEY: &str = "MODELWALK_VIRTUAL_ROOT_KEY";

/// Overrides [`Config::view_marker`].
pub const ENV_VIEW_MARKER: &str = "MODELWALK_VIEW_MARKER";

/// Overrides [`Config::segment_cache`]; `0` selects an unbounded cache.
pub const ENV_SEGMENT_CACHE_CAPACITY: &str = "MODELWALK_SEGMENT_CACHE_CAPACITY";

/// Overrides [`Config::path_cache_capacity`].
pub const ENV_PATH_CACHE_CAPACITY: &str = "MODELWALK_PATH_CACHE_CAPACITY";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use modelwalk::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a capacity variable is not a non-negative integer.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a capacity value is not a non-negative integer.
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_VIRTUAL_ROOT_KEY) {
            config.virtual_root_key = Some(key);
        }

        if let Some(marker) = lookup(ENV_VIEW_MARKER) {
            config.view_marker = Some(marker);
        }

        if let Some(capacity) = lookup(ENV_SEGMENT_CACHE_CAPACITY) {
            let capacity = Self::parse_capacity(ENV_SEGMENT_CACHE_CAPACITY, &capacity)?;
            config.segment_cache = Some(if capacity == 0 {
                SegmentCacheConfig::Unbounded
            } else {
                SegmentCacheConfig::Lru { capacity }
            });
        }

        if let Some(capacity) = lookup(ENV_PATH_CACHE_CAPACITY) {
            config.path_cache_capacity =
                Some(Self::parse_capacity(ENV_PATH_CACHE_CAPACITY, &capacity)?);
        }

        Ok(())
    }

    fn parse_capacity(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Invalid capacity: '{s}' (expected a non-negative integer)"),
        })
    }
}
