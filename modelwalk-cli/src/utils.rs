//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, model tree loading and request
//! construction.

use crate::error::CliError;
use clap::ValueEnum;
use modelwalk::tree::{TreeNode, TreeSpec};
use modelwalk::{BasicRequest, Config, ConfigBuilder, Environ, Resolver};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file replacing discovery.
    pub config: Option<PathBuf>,
}

/// Output format for commands that print structured results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `key: value` line per field
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file, or the nearest `modelwalk.yaml`
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    log::debug!("configuration: {config:?}");

    Ok(config)
}

/// A resolver carrying the loaded configuration.
pub fn load_resolver(global: &GlobalOptions) -> Result<Resolver, CliError> {
    let config = load_configuration(global)?;
    Ok(Resolver::from_config(&config))
}

/// Load and build the model tree described by a YAML file.
pub fn load_tree(path: &Path) -> Result<Arc<TreeNode>, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "Model tree not found: {}",
            path.display()
        )));
    }

    let spec = TreeSpec::load(path)?;
    log::debug!("loaded model tree from {}", path.display());
    Ok(spec.build())
}

/// A request for `path` with an optional virtual-root path.
pub fn build_request(
    resolver: &Resolver,
    path: &str,
    vroot: Option<&str>,
    application_url: Option<&str>,
) -> BasicRequest {
    let mut environ = Environ::for_path(path);
    if let Some(vroot) = vroot {
        environ.insert(resolver.virtual_root_key(), vroot);
    }

    let request = BasicRequest::new(environ);
    match application_url {
        Some(url) => request.with_application_url(url),
        None => request,
    }
}
