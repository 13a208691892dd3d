//! Configuration validation.

use crate::config::schema::{Config, SegmentCacheConfig};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use modelwalk::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
///
/// let bad = Config { view_marker: Some("a/b".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref key) = config.virtual_root_key {
            Self::validate_key("virtual_root_key", key)?;
        }

        if let Some(ref marker) = config.view_marker {
            Self::validate_view_marker(marker)?;
        }

        if let Some(SegmentCacheConfig::Lru { capacity }) = config.segment_cache {
            Self::validate_capacity("segment_cache.capacity", capacity)?;
        }

        if let Some(capacity) = config.path_cache_capacity {
            Self::validate_capacity("path_cache_capacity", capacity)?;
        }

        Ok(())
    }

    /// Environment keys must be non-empty and free of whitespace and null
    /// bytes.
    fn validate_key(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }

        if value.chars().any(|c| c.is_whitespace() || c == '\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain whitespace or null bytes".into(),
            });
        }

        Ok(())
    }

    /// A marker must fit inside a single segment.
    fn validate_view_marker(marker: &str) -> Result<()> {
        if marker.is_empty() {
            return Err(Error::Validation {
                field: "view_marker".into(),
                message: "Cannot be empty".into(),
            });
        }

        if marker.contains('/') {
            return Err(Error::Validation {
                field: "view_marker".into(),
                message: "Cannot contain '/'".into(),
            });
        }

        Ok(())
    }

    fn validate_capacity(field: &str, capacity: usize) -> Result<()> {
        if capacity == 0 {
            return Err(Error::Validation {
                field: field.into(),
                message: "Capacity must be greater than 0".into(),
            });
        }
        Ok(())
    }
}
