//! Configuration file discovery and loading.
//!
//! The nearest `modelwalk.yaml` found walking up from the working directory
//! is loaded, unless an explicit file is given.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "modelwalk.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use modelwalk::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new(".")).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load configuration files, lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn load_all(working_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources: Vec<ConfigSource> = Self::discover(working_dir)
            .map(|path| Self::load_source(path, 1))
            .transpose()?
            .into_iter()
            .collect();
        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// The nearest configuration file at or above `start_dir`.
    #[must_use]
    pub fn discover(start_dir: &Path) -> Option<PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load an explicitly named file as a source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_source(path: PathBuf, precedence: u8) -> Result<ConfigSource> {
        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(ConfigSource {
            path,
            precedence,
            config,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
