//! Quote and join command implementations.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions};
use clap::Args;

/// Percent-encode path segments, one per line.
#[derive(Args)]
pub struct QuoteCommand {
    /// Segments to quote
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,
}

impl QuoteCommand {
    /// Execute the quote command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        for segment in &self.segments {
            println!("{}", resolver.codec().quote_segment(segment));
        }
        Ok(())
    }
}

/// Join segments into a quoted path.
///
/// Pass an empty first segment for an absolute path.
#[derive(Args)]
pub struct JoinCommand {
    /// Segments to join
    #[arg(value_name = "SEGMENT", num_args = 0.., allow_hyphen_values = true)]
    pub segments: Vec<String>,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        println!("{}", resolver.codec().join_segments(&self.segments));
        Ok(())
    }
}
