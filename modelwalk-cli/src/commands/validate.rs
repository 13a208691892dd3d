//! Command to validate a configuration file or a model tree file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use modelwalk::config::{ConfigLoader, ConfigValidator};
use modelwalk::tree::TreeSpec;
use std::path::PathBuf;

/// Validate a modelwalk configuration file or model tree.
#[derive(Args)]
pub struct ValidateCommand {
    /// File to validate
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Treat the file as a model tree instead of a configuration file
    #[arg(long)]
    pub tree: bool,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.path.display()
            )));
        }

        if self.tree {
            return match TreeSpec::load(&self.path) {
                Ok(_) => {
                    println!("Model tree is valid");
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Validation error: {e}");
                    Err(CliError::SemanticFailure(
                        "Model tree validation failed".to_string(),
                    ))
                }
            };
        }

        let result = ConfigLoader::load_file(&self.path)
            .and_then(|config| ConfigValidator::validate(&config));
        match result {
            Ok(()) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
