//! Find command implementation.

use crate::error::CliError;
use crate::utils::{load_resolver, load_tree, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Look up the node at a model path and print its canonical path.
///
/// Exits with status 1 if no node exists at the path.
#[derive(Args)]
pub struct FindCommand {
    /// YAML file describing the model tree
    #[arg(long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Model path, absolute or relative to the root
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Print the path tuple, one segment per line
    #[arg(long)]
    pub tuple: bool,
}

impl FindCommand {
    /// Execute the find command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let root = load_tree(&self.tree)?.as_model();

        let model = resolver.find_model(&root, self.path.as_str())?;

        if self.tuple {
            for segment in modelwalk::model_path_tuple(&model, &[]) {
                println!("{segment}");
            }
        } else {
            println!("{}", resolver.model_path(&model, &[]));
        }
        Ok(())
    }
}
