//! URL generation for located models.
//!
//! The inverse of traversal: given a context, rebuild the URL that would
//! traverse back to it, trimming the virtual-root prefix when one is in
//! effect.

use std::fmt;

use crate::environ::{PathSpec, Request};
use crate::error::Result;
use crate::locate::{find_root, Resolver};
use crate::model::ModelRef;

/// Builds URLs for contexts and finds the virtual root of a request.
///
/// Install a custom implementation with
/// [`Resolver::with_context_url`](crate::Resolver::with_context_url) for
/// graphs whose URLs do not follow the model lineage.
pub trait ContextUrl: Send + Sync + fmt::Debug {
    /// The absolute URL of `context` for `request`.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the context cannot be addressed.
    fn url(&self, resolver: &Resolver, context: &ModelRef, request: &dyn Request) -> Result<String>;

    /// The node acting as root for URL generation in `request`.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the virtual root cannot be found.
    fn virtual_root(
        &self,
        resolver: &Resolver,
        context: &ModelRef,
        request: &dyn Request,
    ) -> Result<ModelRef>;
}

/// URL builder for contexts obtained by traversal.
///
/// The URL is the application URL followed by the context's
/// [`model_path`](crate::model_path) and a trailing slash. When the request
/// carries a virtual-root path, that prefix is removed from the path first.
///
/// # Examples
///
/// ```
/// use modelwalk::{BasicRequest, Resolver};
/// use modelwalk::tree::TreeSpec;
///
/// let root = TreeSpec::folder()
///     .with_child("a", TreeSpec::folder().with_child("b", TreeSpec::leaf()))
///     .build();
/// let b = root.descendant(&["a", "b"]).unwrap().as_model();
///
/// let resolver = Resolver::new();
/// let request = BasicRequest::blank("/").with_application_url("http://example.com");
/// assert_eq!(resolver.model_url(&b, &request).unwrap(), "http://example.com/a/b/");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TraversalContextUrl;

impl ContextUrl for TraversalContextUrl {
    fn url(&self, resolver: &Resolver, context: &ModelRef, request: &dyn Request) -> Result<String> {
        let mut path = resolver.model_path(context, &[]);
        if path != "/" {
            path.push('/');
        }

        if let Some(vroot_path) = request.environ().get(resolver.virtual_root_key()) {
            if let Some(rest) = path.strip_prefix(vroot_path) {
                path = rest.to_string();
            }
        }

        Ok(format!("{}{path}", request.application_url()))
    }

    fn virtual_root(
        &self,
        resolver: &Resolver,
        context: &ModelRef,
        request: &dyn Request,
    ) -> Result<ModelRef> {
        if let Some(vroot_path) = request.environ().get(resolver.virtual_root_key()) {
            return resolver.find_model(context, PathSpec::from(vroot_path));
        }
        Ok(request.root().unwrap_or_else(|| find_root(context)))
    }
}
