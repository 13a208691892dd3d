//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which traverses a request
//! path through a model tree and reports what traversal found.

use crate::error::CliError;
use crate::utils::{build_request, load_resolver, load_tree, GlobalOptions, OutputFormat};
use clap::Args;
use modelwalk::TraversalResult;
use serde::Serialize;
use std::path::PathBuf;

/// Traverse a request path through a model tree.
#[derive(Args)]
pub struct ResolveCommand {
    /// YAML file describing the model tree
    #[arg(long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Request path, percent-encoded
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Virtual-root path supplied by the front-end server
    #[arg(long, value_name = "PATH")]
    pub vroot: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

/// Serializable view of a traversal result.
#[derive(Debug, Serialize)]
pub struct ResolveOutput {
    /// Quoted path of the context.
    pub context: String,
    /// View name; empty for the default view.
    pub view_name: String,
    /// Segments left after the view name.
    pub subpath: Vec<String>,
    /// Segments consumed by the walk.
    pub traversed: Vec<String>,
    /// Quoted path of the virtual root.
    pub virtual_root: String,
    /// Decoded virtual-root path.
    pub virtual_root_path: Vec<String>,
}

impl ResolveOutput {
    fn new(resolver: &modelwalk::Resolver, result: TraversalResult) -> Self {
        Self {
            context: resolver.model_path(&result.context, &[]),
            virtual_root: resolver.model_path(&result.virtual_root, &[]),
            view_name: result.view_name,
            subpath: result.subpath,
            traversed: result.traversed,
            virtual_root_path: result.virtual_root_path,
        }
    }

    fn to_text(&self) -> String {
        [
            format!("context: {}", self.context),
            format!("view_name: {}", self.view_name),
            format!("subpath: {}", self.subpath.join("/")),
            format!("traversed: {}", self.traversed.join("/")),
            format!("virtual_root: {}", self.virtual_root),
            format!("virtual_root_path: {}", self.virtual_root_path.join("/")),
        ]
        .join("\n")
    }
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let tree = load_tree(&self.tree)?;
        let request = build_request(&resolver, &self.path, self.vroot.as_deref(), None)
            .with_root(tree.as_model());

        let result = resolver.resolve_request(&request)?;
        log::info!(
            "resolved {:?} to view {:?} after {} segment(s)",
            self.path,
            result.view_name,
            result.traversed.len()
        );

        let output = ResolveOutput::new(&resolver, result);
        match self.format {
            OutputFormat::Text => println!("{}", output.to_text()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        }

        Ok(())
    }
}
