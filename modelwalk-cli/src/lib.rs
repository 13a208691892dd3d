//! Library exports for modelwalk-cli.
//!
//! This module exports the CLI structure for use by documentation tooling
//! such as man page generation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
