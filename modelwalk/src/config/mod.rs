//! Configuration system for modelwalk.
//!
//! This module provides hierarchical configuration with support for:
//! - A YAML configuration file (`modelwalk.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`MODELWALK_*`)
//! 3. The configuration file (explicit, or the nearest `modelwalk.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use modelwalk::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/app"))
//!     .build()
//!     .unwrap();
//! println!("view marker: {}", config.view_marker());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use modelwalk::config::{Config, ConfigBuilder, SegmentCacheConfig};
//! use modelwalk::Resolver;
//!
//! let custom = Config {
//!     virtual_root_key: Some("HTTP_X_SITE_ROOT".to_string()),
//!     segment_cache: Some(SegmentCacheConfig::Lru { capacity: 500 }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! let resolver = Resolver::from_config(&config);
//! assert_eq!(resolver.virtual_root_key(), "HTTP_X_SITE_ROOT");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, SegmentCacheConfig};
pub use validator::ConfigValidator;
