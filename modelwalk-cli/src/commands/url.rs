//! URL command implementation.

use crate::error::CliError;
use crate::utils::{build_request, load_resolver, load_tree, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Print the URL of the node at a model path.
#[derive(Args)]
pub struct UrlCommand {
    /// YAML file describing the model tree
    #[arg(long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Model path of the node to address
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Virtual-root path in effect for the request
    #[arg(long, value_name = "PATH")]
    pub vroot: Option<String>,

    /// Scheme, host and script prefix of the application
    #[arg(long, value_name = "URL", default_value = "http://localhost")]
    pub app_url: String,
}

impl UrlCommand {
    /// Execute the url command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let root = load_tree(&self.tree)?.as_model();

        let model = resolver.find_model(&root, self.path.as_str())?;
        let request = build_request(&resolver, "/", self.vroot.as_deref(), Some(&self.app_url))
            .with_root(root);

        println!("{}", resolver.model_url(&model, &request)?);
        Ok(())
    }
}
