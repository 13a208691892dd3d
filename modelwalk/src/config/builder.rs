//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from defaults, files, the environment and
/// programmatic overrides, in that order of increasing precedence.
///
/// # Examples
///
/// ```
/// use modelwalk::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { view_marker: Some("+".into()), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.view_marker(), "+");
/// assert_eq!(config.path_cache_capacity, Some(1000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// A builder that reads files from the current directory and the
    /// process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover configuration files from `dir` instead of the current
    /// directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load exactly this file instead of discovering one. The file must
    /// exist.
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `MODELWALK_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Assemble and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        let sources = self.load_sources()?;
        let mut config = ConfigMerger::merge(Config::with_defaults(), &sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn load_sources(&self) -> Result<Vec<ConfigSource>> {
        if self.skip_files {
            return Ok(Vec::new());
        }

        if let Some(ref path) = self.config_file {
            return Ok(vec![ConfigLoader::load_source(path.clone(), 1)?]);
        }

        let working_dir = match self.working_dir {
            Some(ref dir) => dir.clone(),
            None => env::current_dir()?,
        };
        ConfigLoader::load_all(&working_dir)
    }
}
