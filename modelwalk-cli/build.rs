//! Build script for modelwalk-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("modelwalk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve request paths against a model tree")
        .long_about(
            "Command-line tool for decoding request paths, traversing model trees and generating model URLs",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file to use instead of discovering modelwalk.yaml")
                .value_name("FILE")
                .global(true)
                .env("MODELWALK_CONFIG"),
        )
        .subcommands(vec![
            Command::new("decode")
                .about("Split a request path into decoded segments")
                .long_about("Percent-decode a request path and normalize empty, '.' and '..' segments"),
            Command::new("quote")
                .about("Percent-encode path segments")
                .long_about("Quote each segment so it can be placed in a URL path"),
            Command::new("join")
                .about("Join segments into a quoted path")
                .long_about("Quote and join segments; an empty first segment makes the path absolute"),
            Command::new("resolve")
                .about("Traverse a request path through a model tree")
                .long_about("Report the context, view name, subpath and virtual root for a request path"),
            Command::new("find")
                .about("Look up a node by model path")
                .long_about("Print the canonical path of the node at a model path, or fail if none exists"),
            Command::new("url")
                .about("Print the URL of a node")
                .long_about("Generate the URL of a node, honoring a virtual root"),
            Command::new("validate")
                .about("Validate a configuration file or model tree")
                .long_about("Check a modelwalk.yaml or model tree file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = std::env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let man_dir = PathBuf::from(out_dir).join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("modelwalk.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
