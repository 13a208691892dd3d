//! Roots for requests matched by URL routing.

use std::sync::Arc;

use crate::environ::{MatchDict, PathSpec, Request};
use crate::model::{Model, ModelRef};

/// Produces the root node for a request.
pub type RootFactory = dyn Fn(&dyn Request) -> ModelRef + Send + Sync;

/// Root created for a request when the application supplies none.
///
/// Holds the route match values as attributes. It has no name, no parent and
/// no children, so any path walked from it stops at the first segment.
#[derive(Debug, Clone, Default)]
pub struct RouteRoot {
    attributes: MatchDict,
}

impl RouteRoot {
    /// A root carrying `attributes`.
    #[must_use]
    pub fn new(attributes: MatchDict) -> Self {
        Self { attributes }
    }

    /// A match value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathSpec> {
        self.attributes.get(name)
    }

    /// All match values.
    #[must_use]
    pub fn attributes(&self) -> &MatchDict {
        &self.attributes
    }
}

impl Model for RouteRoot {
    fn name(&self) -> Option<&str> {
        None
    }

    fn parent(&self) -> Option<ModelRef> {
        None
    }
}

/// Build a [`RouteRoot`] from the request's match dictionary.
#[must_use]
pub fn default_root_factory(request: &dyn Request) -> ModelRef {
    let attributes = request.matchdict().cloned().unwrap_or_default();
    Arc::new(RouteRoot::new(attributes))
}
