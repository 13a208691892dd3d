//! Locating nodes in a model graph and addressing them by path.
//!
//! The free functions here use [`Resolver::global`], which carries the
//! built-in strategies. Applications that inject their own traverser or URL
//! builder call the same operations on their [`Resolver`].

mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::Resolver;

use std::sync::Arc;

use crate::environ::{PathSpec, Request};
use crate::error::Result;
use crate::model::{lineage, Model, ModelRef};
use crate::traversal::TraversalResult;

/// The root of the graph `model` belongs to: the last node of its lineage.
///
/// # Examples
///
/// ```
/// use modelwalk::{find_root, same_model};
/// use modelwalk::tree::TreeSpec;
///
/// let root = TreeSpec::folder().with_child("a", TreeSpec::leaf()).build();
/// let a = root.child("a").unwrap().as_model();
/// assert!(same_model(&find_root(&a), &root.as_model()));
/// ```
#[must_use]
pub fn find_root(model: &ModelRef) -> ModelRef {
    lineage(model).last().unwrap_or_else(|| Arc::clone(model))
}

/// The first node in `model`'s lineage, starting with `model` itself, for
/// which `predicate` holds.
pub fn find_interface<P>(model: &ModelRef, mut predicate: P) -> Option<ModelRef>
where
    P: FnMut(&ModelRef) -> bool,
{
    lineage(model).find(|node| predicate(node))
}

/// The nearest node in `model`'s lineage whose concrete type is `T`.
#[must_use]
pub fn find_instance<T: Model>(model: &ModelRef) -> Option<ModelRef> {
    find_interface(model, |node| node.is::<T>())
}

/// The names along `model`'s lineage from the root down, with `elements`
/// appended.
///
/// The root contributes an empty first element, so the result is an
/// absolute path tuple that [`find_model`] accepts.
#[must_use]
pub fn model_path_tuple(model: &ModelRef, elements: &[&str]) -> Vec<String> {
    let mut path: Vec<String> = lineage(model)
        .map(|node| node.name().unwrap_or_default().to_string())
        .collect();
    path.reverse();
    path.extend(elements.iter().map(ToString::to_string));
    path
}

/// The quoted absolute path of `model`, with `elements` appended.
#[must_use]
pub fn model_path(model: &ModelRef, elements: &[&str]) -> String {
    Resolver::global().model_path(model, elements)
}

/// Traverse `path` from `model`; see [`Resolver::traverse`].
///
/// # Errors
///
/// Returns an error if the path cannot be decoded.
pub fn traverse(model: &ModelRef, path: impl Into<PathSpec>) -> Result<TraversalResult> {
    Resolver::global().traverse(model, path)
}

/// The node at `path`; see [`Resolver::find_model`].
///
/// # Errors
///
/// Returns [`Error::NotFound`](crate::Error::NotFound) if no node exists at
/// `path`.
pub fn find_model(model: &ModelRef, path: impl Into<PathSpec>) -> Result<ModelRef> {
    Resolver::global().find_model(model, path)
}

/// The virtual root of `request`; see [`Resolver::virtual_root`].
///
/// # Errors
///
/// Returns [`Error::NotFound`](crate::Error::NotFound) if the request names
/// a virtual-root path that does not exist.
pub fn virtual_root(model: &ModelRef, request: &dyn Request) -> Result<ModelRef> {
    Resolver::global().virtual_root(model, request)
}

/// The absolute URL of `model`; see [`Resolver::model_url`].
///
/// # Errors
///
/// Returns the URL builder's error.
pub fn model_url(model: &ModelRef, request: &dyn Request) -> Result<String> {
    Resolver::global().model_url(model, request)
}
