//! Model graph capabilities and lineage.
//!
//! Application objects take part in traversal by implementing [`Model`]. A
//! model has an optional name and an optional parent; models that can hold
//! children also expose a [`Container`] through [`Model::as_container`].
//! This crate only ever reads the graph.
//!
//! # Examples
//!
//! ```
//! use modelwalk::model::{lineage, Model};
//! use modelwalk::tree::TreeSpec;
//!
//! let root = TreeSpec::folder()
//!     .with_child("a", TreeSpec::folder().with_child("b", TreeSpec::leaf()))
//!     .build();
//! let b = root.child("a").and_then(|a| a.child("b")).unwrap();
//!
//! let names: Vec<_> = lineage(&b.as_model())
//!     .map(|node| node.name().unwrap_or("").to_string())
//!     .collect();
//! assert_eq!(names, vec!["b", "a", ""]);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a node in the model graph.
pub type ModelRef = Arc<dyn Model>;

/// Upcast to [`Any`] for type checks on model trait objects.
///
/// Implemented for every `'static` type; there is no need to implement it by
/// hand.
pub trait AsAny: Any {
    /// This value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A node in an application's model graph.
///
/// # Contract
///
/// Parent references must be acyclic; [`lineage`] does not detect cycles.
/// The graph must not be mutated while a traversal is running.
pub trait Model: AsAny + fmt::Debug + Send + Sync {
    /// The name this node is reachable by from its parent. The root has no
    /// name (or an empty one).
    fn name(&self) -> Option<&str>;

    /// The containing node, or `None` at the root.
    fn parent(&self) -> Option<ModelRef>;

    /// Keyed child lookup, if this node can hold children.
    fn as_container(&self) -> Option<&dyn Container> {
        None
    }
}

/// Keyed child lookup for models that hold children.
pub trait Container {
    /// The child registered under `name`, if any.
    fn get(&self, name: &str) -> Option<ModelRef>;
}

impl dyn Model {
    /// Whether this node is a `T`.
    #[must_use]
    pub fn is<T: Model>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// This node as a `T`, if it is one.
    #[must_use]
    pub fn downcast_ref<T: Model>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Whether two handles refer to the same node.
///
/// Compares data pointers only, so handles created through different trait
/// object coercions still compare equal.
#[must_use]
pub fn same_model(a: &ModelRef, b: &ModelRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Iterator over a node and its ancestors, nearest first.
///
/// Created by [`lineage`].
#[derive(Debug, Clone)]
pub struct Lineage {
    next: Option<ModelRef>,
}

impl Iterator for Lineage {
    type Item = ModelRef;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

impl std::iter::FusedIterator for Lineage {}

/// Walk from `model` up through its parents, ending at (and including) the
/// node with no parent.
///
/// The iterator is lazy and never ends if the parent chain contains a cycle.
#[must_use]
pub fn lineage(model: &ModelRef) -> Lineage {
    Lineage {
        next: Some(Arc::clone(model)),
    }
}
