//! Request path resolution against a model graph.
//!
//! A [`Traverser`] takes the physical root and the request environment and
//! produces a [`TraversalResult`]. [`ModelGraphTraverser`] is the built-in
//! implementation; applications that resolve requests some other way can
//! supply their own through [`Resolver::with_traverser`](crate::Resolver::with_traverser).

mod result;
mod route;
mod traverser;

pub use result::TraversalResult;
pub use route::{default_root_factory, RootFactory, RouteRoot};
pub use traverser::{ModelGraphTraverser, VIEW_MARKER};

use crate::environ::Environ;
use crate::error::Result;
use crate::model::ModelRef;

/// Resolves a request environment to a context.
pub trait Traverser: Send + Sync + std::fmt::Debug {
    /// Walk from `root` according to `environ`.
    ///
    /// # Errors
    ///
    /// Returns an error if a path taken from the environment cannot be
    /// decoded. Failing to find a child is not an error.
    fn resolve(&self, root: &ModelRef, environ: &Environ) -> Result<TraversalResult>;
}
