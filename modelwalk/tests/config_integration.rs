//! Integration tests for the configuration system.
//!
//! Covers file discovery, layering of files, the environment and explicit
//! overrides, validation, and a configured resolver end to end.
//!
//! Tests that modify environment variables are marked with `#[serial]` so
//! they run sequentially; environment variables are process-global.

mod common;

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use common::{node, site};
use modelwalk::cache::CachePolicy;
use modelwalk::config::environment::{
    ENV_PATH_CACHE_CAPACITY, ENV_SEGMENT_CACHE_CAPACITY, ENV_VIEW_MARKER, ENV_VIRTUAL_ROOT_KEY,
};
use modelwalk::config::{Config, ConfigBuilder, SegmentCacheConfig, CONFIG_FILE_NAME};
use modelwalk::error::Error;
use modelwalk::{same_model, BasicRequest, Environ, Resolver};

// ============================================================================
// Test Utilities
// ============================================================================

/// Helper to create a config file in `dir`.
fn create_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `MODELWALK_*` override for the lifetime of the guards.
fn clean_env() -> Vec<EnvGuard> {
    [
        ENV_VIRTUAL_ROOT_KEY,
        ENV_VIEW_MARKER,
        ENV_SEGMENT_CACHE_CAPACITY,
        ENV_PATH_CACHE_CAPACITY,
    ]
    .into_iter()
    .map(EnvGuard::remove)
    .collect()
}

// ============================================================================
// Discovery and layering
// ============================================================================

#[test]
fn test_defaults_without_files() {
    let temp = TempDir::new().unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config, Config::with_defaults());
}

#[test]
fn test_discovers_file_in_ancestor() {
    let temp = TempDir::new().unwrap();
    create_config(temp.path(), "view_marker: '+'\npath_cache_capacity: 64\n");
    let nested = temp.path().join("app").join("views");
    fs::create_dir_all(&nested).unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(&nested)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.view_marker(), "+");
    assert_eq!(config.path_cache_policy(), CachePolicy::lru(64));
    assert_eq!(config.virtual_root_key(), "HTTP_X_VHM_ROOT");
}

#[test]
fn test_nearest_file_wins() {
    let temp = TempDir::new().unwrap();
    create_config(temp.path(), "view_marker: '+'\n");
    let project = temp.path().join("project");
    fs::create_dir_all(&project).unwrap();
    create_config(&project, "virtual_root_key: X_ROOT\n");

    let config = ConfigBuilder::new()
        .with_working_dir(&project)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.virtual_root_key(), "X_ROOT");
    assert_eq!(config.view_marker(), "@@");
}

#[test]
fn test_explicit_file_replaces_discovery() {
    let temp = TempDir::new().unwrap();
    create_config(temp.path(), "view_marker: '+'\n");
    let explicit = temp.path().join("other.yaml");
    fs::write(&explicit, "segment_cache:\n  policy: unbounded\n").unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .with_file(&explicit)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.segment_cache, Some(SegmentCacheConfig::Unbounded));
    assert_eq!(config.view_marker(), "@@");
}

#[test]
fn test_missing_explicit_file_fails() {
    let temp = TempDir::new().unwrap();

    let result = ConfigBuilder::new()
        .with_file(&temp.path().join("absent.yaml"))
        .skip_env()
        .build();

    assert!(matches!(result, Err(Error::InvalidPath { .. })));
}

#[test]
fn test_unknown_field_rejected() {
    let temp = TempDir::new().unwrap();
    create_config(temp.path(), "view_marker: '+'\ncolour: blue\n");

    let result = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .skip_env()
        .build();

    assert!(result.is_err());
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp = TempDir::new().unwrap();
    create_config(temp.path(), "segment_cache:\n  policy: lru\n  capacity: 0\n");

    let result = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .skip_env()
        .build();

    match result {
        Err(Error::Validation { field, .. }) => assert_eq!(field, "segment_cache.capacity"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_overrides_beat_files() {
    let temp = TempDir::new().unwrap();
    create_config(temp.path(), "view_marker: '+'\n");

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .skip_env()
        .with_config(Config {
            view_marker: Some("~".into()),
            ..Config::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.view_marker(), "~");
}

// ============================================================================
// Environment
// ============================================================================

#[test]
#[serial]
fn test_environment_beats_files() {
    let _clean = clean_env();
    let temp = TempDir::new().unwrap();
    create_config(temp.path(), "view_marker: '+'\nvirtual_root_key: FROM_FILE\n");
    let _marker = EnvGuard::new(ENV_VIEW_MARKER, "!");
    let _segments = EnvGuard::new(ENV_SEGMENT_CACHE_CAPACITY, "0");

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .build()
        .unwrap();

    assert_eq!(config.view_marker(), "!");
    assert_eq!(config.virtual_root_key(), "FROM_FILE");
    assert_eq!(config.segment_cache_policy(), CachePolicy::Unbounded);
}

#[test]
#[serial]
fn test_skip_env_ignores_environment() {
    let _clean = clean_env();
    let temp = TempDir::new().unwrap();
    let _marker = EnvGuard::new(ENV_VIEW_MARKER, "!");

    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.view_marker(), "@@");
}

#[test]
#[serial]
fn test_malformed_environment_capacity() {
    let _clean = clean_env();
    let temp = TempDir::new().unwrap();
    let _capacity = EnvGuard::new(ENV_PATH_CACHE_CAPACITY, "lots");

    let result = ConfigBuilder::new().with_working_dir(temp.path()).build();

    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
#[serial]
fn test_environment_value_failing_validation() {
    let _clean = clean_env();
    let temp = TempDir::new().unwrap();
    let _key = EnvGuard::new(ENV_VIRTUAL_ROOT_KEY, "HAS SPACE");

    let result = ConfigBuilder::new().with_working_dir(temp.path()).build();

    assert!(matches!(result, Err(Error::Validation { .. })));
}

// ============================================================================
// Configured resolver
// ============================================================================

#[test]
fn test_configured_resolver_end_to_end() {
    let temp = TempDir::new().unwrap();
    create_config(
        temp.path(),
        "view_marker: '+'\nvirtual_root_key: X_VHOST_ROOT\nsegment_cache:\n  policy: lru\n  capacity: 16\n",
    );
    let config = ConfigBuilder::new()
        .with_working_dir(temp.path())
        .skip_env()
        .build()
        .unwrap();
    let resolver = Resolver::from_config(&config);

    let tree = site();
    let root = tree.as_model();

    let result = resolver
        .resolve(&root, &Environ::for_path("/blog/+feed"))
        .unwrap();
    assert!(same_model(&result.context, &node(&tree, &["blog"])));
    assert_eq!(result.view_name, "feed");

    // The default marker is an ordinary segment under this configuration.
    let result = resolver
        .resolve(&root, &Environ::for_path("/blog/@@feed"))
        .unwrap();
    assert_eq!(result.view_name, "@@feed");

    let environ = Environ::for_path("/2024").with_var("X_VHOST_ROOT", "/archives");
    let result = resolver.resolve(&root, &environ).unwrap();
    assert!(same_model(&result.virtual_root, &node(&tree, &["archives"])));

    let request = BasicRequest::new(environ).with_application_url("http://example.com");
    let archive = node(&tree, &["archives", "2024"]);
    assert_eq!(
        resolver.model_url(&archive, &request).unwrap(),
        "http://example.com/2024/"
    );
}
