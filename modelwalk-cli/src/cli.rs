//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DecodeCommand, FindCommand, JoinCommand, QuoteCommand, ResolveCommand,
    UrlCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve request paths against a model tree.
#[derive(Parser)]
#[command(name = "modelwalk")]
#[command(version, about = "Resolve request paths against a model tree", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of discovering modelwalk.yaml
    #[arg(long, value_name = "FILE", global = true, env = "MODELWALK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a request path into decoded segments
    Decode(DecodeCommand),

    /// Percent-encode path segments
    Quote(QuoteCommand),

    /// Join segments into a quoted path
    Join(JoinCommand),

    /// Traverse a request path through a model tree
    Resolve(ResolveCommand),

    /// Look up a node by model path
    Find(FindCommand),

    /// Print the URL of a node
    Url(UrlCommand),

    /// Validate a configuration file or model tree
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "modelwalk",
            "resolve",
            "--tree",
            "site.yaml",
            "/a/@@edit",
            "--vroot",
            "/site",
            "--verbose",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Resolve(cmd) => {
                assert_eq!(cmd.path, "/a/@@edit");
                assert_eq!(cmd.vroot.as_deref(), Some("/site"));
            }
            _ => panic!("expected resolve"),
        }
    }
}
