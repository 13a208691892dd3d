//! Decode command implementation.
//!
//! Splits a request path into decoded segments the way traversal sees them.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions, OutputFormat};
use clap::Args;

/// Decode a request path into segments.
#[derive(Args)]
pub struct DecodeCommand {
    /// Percent-encoded request path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl DecodeCommand {
    /// Execute the decode command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let segments = resolver.codec().decode_path(&self.path)?;

        match self.format {
            OutputFormat::Text => {
                for segment in segments.iter() {
                    println!("{segment}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(&segments[..])?);
            }
        }

        Ok(())
    }
}
