#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # modelwalk
//!
//! Resolution of request paths against a graph of application models.
//!
//! Given a root model and a request environment, traversal walks child
//! lookups segment by segment to find the context that handles the request,
//! the view name following it and any remaining subpath. The inverse
//! direction builds canonical paths and URLs back from located models,
//! accounting for virtual hosting.
//!
//! ## Core Types
//!
//! - [`Model`] and [`Container`]: the capabilities a graph node exposes
//! - [`Traverser`] and [`ModelGraphTraverser`]: request path resolution
//! - [`TraversalResult`]: context, view name, subpath and virtual root
//! - [`ContextUrl`] and [`TraversalContextUrl`]: URL generation
//! - [`Resolver`]: the facade carrying injectable strategies
//! - [`PathCodec`]: cached path decoding and segment quoting
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use modelwalk::{find_model, model_path, same_model, Environ, ModelGraphTraverser, Traverser};
//! use modelwalk::tree::TreeSpec;
//!
//! let root = TreeSpec::folder()
//!     .with_child("a", TreeSpec::folder().with_child("b", TreeSpec::folder()))
//!     .build()
//!     .as_model();
//!
//! let result = ModelGraphTraverser::new()
//!     .resolve(&root, &Environ::for_path("/a/b/@@edit"))
//!     .unwrap();
//! assert_eq!(result.view_name, "edit");
//! assert_eq!(model_path(&result.context, &[]), "/a/b");
//!
//! let b = find_model(&root, "/a/b").unwrap();
//! assert!(same_model(&b, &result.context));
//! ```

pub mod cache;
pub mod codec;
pub mod config;
pub mod environ;
pub mod error;
pub mod locate;
pub mod logging;
pub mod model;
pub mod traversal;
pub mod tree;
pub mod url;

// Re-export key types at crate root for convenience
pub use codec::{decode_path, join_segments, quote_segment, PathCodec, PathTuple};
pub use config::{Config, ConfigBuilder};
pub use environ::{BasicRequest, Environ, MatchDict, PathSpec, Request};
pub use error::{Error, Result};
pub use locate::{
    find_instance, find_interface, find_model, find_root, model_path, model_path_tuple, model_url,
    traverse, virtual_root, Resolver,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{lineage, same_model, Container, Lineage, Model, ModelRef};
pub use traversal::{
    default_root_factory, ModelGraphTraverser, RouteRoot, TraversalResult, Traverser,
};
pub use url::{ContextUrl, TraversalContextUrl};
