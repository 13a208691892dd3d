//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `decode`: Split a request path into decoded segments
//! - `quote` and `join`: Encode segments and build paths
//! - `resolve`: Traverse a request path through a model tree
//! - `find`: Look up a node by model path
//! - `url`: Generate the URL of a node
//! - `validate`: Validate a configuration file or model tree
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod decode;
pub mod find;
pub mod quote;
pub mod resolve;
pub mod url;
pub mod validate;

pub use completions::CompletionsCommand;
pub use decode::DecodeCommand;
pub use find::FindCommand;
pub use quote::{JoinCommand, QuoteCommand};
pub use resolve::ResolveCommand;
pub use url::UrlCommand;
pub use validate::ValidateCommand;
