//! The strategy-carrying facade over traversal and URL building.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::codec::PathCodec;
use crate::config::Config;
use crate::environ::{Environ, PathSpec, Request, VH_ROOT_KEY};
use crate::error::{Error, Result};
use crate::model::ModelRef;
use crate::traversal::{default_root_factory, ModelGraphTraverser, RootFactory, TraversalResult, Traverser};
use crate::url::{ContextUrl, TraversalContextUrl};

use super::{find_root, model_path_tuple};

/// Resolves paths and builds URLs with injectable strategies.
///
/// A resolver bundles the codec, the [`Traverser`], the [`ContextUrl`]
/// builder and the root factory used for route-matched requests. Every
/// strategy defaults to the built-in one; replace any of them at
/// construction time.
///
/// # Examples
///
/// ```
/// use modelwalk::{same_model, Resolver};
/// use modelwalk::tree::TreeSpec;
///
/// let root = TreeSpec::folder()
///     .with_child("a", TreeSpec::folder().with_child("b", TreeSpec::leaf()))
///     .build();
/// let b = root.descendant(&["a", "b"]).unwrap().as_model();
///
/// let resolver = Resolver::new();
/// let path = resolver.model_path(&b, &[]);
/// assert_eq!(path, "/a/b");
/// let found = resolver.find_model(&root.as_model(), path.as_str()).unwrap();
/// assert!(same_model(&found, &b));
/// ```
#[derive(Clone)]
pub struct Resolver {
    codec: Arc<PathCodec>,
    traverser: Arc<dyn Traverser>,
    context_url: Arc<dyn ContextUrl>,
    root_factory: Arc<RootFactory>,
    virtual_root_key: String,
}

impl Resolver {
    /// Resolver with the built-in strategies and the shared codec.
    #[must_use]
    pub fn new() -> Self {
        let codec = PathCodec::shared();
        let traverser = ModelGraphTraverser::with_codec(Arc::clone(&codec));
        Self {
            codec,
            traverser: Arc::new(traverser),
            context_url: Arc::new(TraversalContextUrl),
            root_factory: Arc::new(default_root_factory),
            virtual_root_key: VH_ROOT_KEY.to_string(),
        }
    }

    /// Resolver with the built-in strategies, configured from `config`.
    ///
    /// The codec gets its own caches sized by the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let codec = Arc::new(PathCodec::from_config(config));
        let traverser = ModelGraphTraverser::from_config(config, Arc::clone(&codec));
        Self {
            codec,
            traverser: Arc::new(traverser),
            context_url: Arc::new(TraversalContextUrl),
            root_factory: Arc::new(default_root_factory),
            virtual_root_key: config.virtual_root_key().to_string(),
        }
    }

    /// Process-wide resolver with the built-in strategies.
    ///
    /// Backs the free functions in [`locate`](crate::locate).
    pub fn global() -> &'static Resolver {
        static GLOBAL: OnceLock<Resolver> = OnceLock::new();
        GLOBAL.get_or_init(Resolver::new)
    }

    /// Replace the traverser.
    #[must_use]
    pub fn with_traverser(mut self, traverser: Arc<dyn Traverser>) -> Self {
        self.traverser = traverser;
        self
    }

    /// Replace the URL builder.
    #[must_use]
    pub fn with_context_url(mut self, context_url: Arc<dyn ContextUrl>) -> Self {
        self.context_url = context_url;
        self
    }

    /// Replace the factory producing roots for requests without one.
    #[must_use]
    pub fn with_root_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&dyn Request) -> ModelRef + Send + Sync + 'static,
    {
        self.root_factory = Arc::new(factory);
        self
    }

    /// The codec used for path strings.
    #[must_use]
    pub fn codec(&self) -> &Arc<PathCodec> {
        &self.codec
    }

    /// The environment key read for the virtual-root path when building URLs.
    #[must_use]
    pub fn virtual_root_key(&self) -> &str {
        &self.virtual_root_key
    }

    /// The root for `request`: the one cached on it, else a fresh one from
    /// the root factory.
    #[must_use]
    pub fn root_for(&self, request: &dyn Request) -> ModelRef {
        request.root().unwrap_or_else(|| (self.root_factory)(request))
    }

    /// Run the traverser from `root`.
    ///
    /// # Errors
    ///
    /// Returns the traverser's error, typically an undecodable path.
    pub fn resolve(&self, root: &ModelRef, environ: &Environ) -> Result<TraversalResult> {
        self.traverser.resolve(root, environ)
    }

    /// Run the traverser for a request from [`root_for`](Self::root_for).
    ///
    /// # Errors
    ///
    /// Returns the traverser's error, typically an undecodable path.
    pub fn resolve_request(&self, request: &dyn Request) -> Result<TraversalResult> {
        let root = self.root_for(request);
        self.traverser.resolve(&root, request.environ())
    }

    /// Traverse `path` from `model`.
    ///
    /// Segment sequences are joined into a path string first. An absolute
    /// path starts from the root of `model`'s graph, a relative one from
    /// `model` itself. An empty path resolves to `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be decoded.
    pub fn traverse(&self, model: &ModelRef, path: impl Into<PathSpec>) -> Result<TraversalResult> {
        let path = match path.into() {
            PathSpec::Text(text) => text,
            PathSpec::Segments(segments) if segments.is_empty() => String::new(),
            PathSpec::Segments(segments) => self.codec.join_segments(&segments),
        };

        let start = if path.starts_with('/') {
            find_root(model)
        } else {
            Arc::clone(model)
        };

        self.traverser.resolve(&start, &Environ::for_path(path))
    }

    /// The node at `path` relative to `model`, or absolute from its root.
    ///
    /// Accepts anything [`model_path`](Self::model_path) or
    /// [`model_path_tuple`](super::model_path_tuple) produce.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the path does not lead to an existing
    /// node, or a decode error for an undecodable path.
    pub fn find_model(&self, model: &ModelRef, path: impl Into<PathSpec>) -> Result<ModelRef> {
        let result = self.traverse(model, path)?;
        if result.view_name.is_empty() {
            Ok(result.context)
        } else {
            Err(Error::NotFound {
                context: self.model_path(&result.context, &[]),
                view_name: result.view_name,
            })
        }
    }

    /// The quoted absolute path of `model`, with `elements` appended.
    #[must_use]
    pub fn model_path(&self, model: &ModelRef, elements: &[&str]) -> String {
        self.codec.join_segments(&model_path_tuple(model, elements))
    }

    /// The virtual root for `request`, per the URL builder.
    ///
    /// # Errors
    ///
    /// Returns the URL builder's error, such as a virtual-root path that
    /// does not exist.
    pub fn virtual_root(&self, model: &ModelRef, request: &dyn Request) -> Result<ModelRef> {
        self.context_url.virtual_root(self, model, request)
    }

    /// The absolute URL of `model` for `request`, per the URL builder.
    ///
    /// # Errors
    ///
    /// Returns the URL builder's error.
    pub fn model_url(&self, model: &ModelRef, request: &dyn Request) -> Result<String> {
        self.context_url.url(self, model, request)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("traverser", &self.traverser)
            .field("context_url", &self.context_url)
            .field("virtual_root_key", &self.virtual_root_key)
            .finish_non_exhaustive()
    }
}
