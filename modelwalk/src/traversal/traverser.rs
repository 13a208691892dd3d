//! The built-in model graph traverser.

use std::sync::Arc;

use crate::codec::{PathCodec, PathTuple};
use crate::config::Config;
use crate::environ::{Environ, PathSpec, SUBPATH_KEY, TRAVERSE_KEY, VH_ROOT_KEY};
use crate::error::Result;
use crate::model::ModelRef;

use super::{TraversalResult, Traverser};

/// Default prefix marking a segment as an explicit view name.
pub const VIEW_MARKER: &str = "@@";

/// Walks child lookups segment by segment from a root node.
///
/// Traversal stops at the first segment that starts with the view marker, at
/// the first node without child lookup, or at the first missing child. The
/// stopping segment becomes the view name and the rest the subpath. A missing
/// child is not an error: deciding that nothing handles the request is left
/// to view dispatch.
///
/// # Examples
///
/// ```
/// use modelwalk::{Environ, ModelGraphTraverser, Traverser};
/// use modelwalk::tree::TreeSpec;
///
/// let root = TreeSpec::folder()
///     .with_child("a", TreeSpec::folder().with_child("b", TreeSpec::folder()))
///     .build();
///
/// let traverser = ModelGraphTraverser::new();
/// let result = traverser
///     .resolve(&root.as_model(), &Environ::for_path("/a/b/c/d"))
///     .unwrap();
/// assert_eq!(result.context.name(), Some("b"));
/// assert_eq!(result.view_name, "c");
/// assert_eq!(result.subpath, vec!["d"]);
/// assert_eq!(result.traversed, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct ModelGraphTraverser {
    codec: Arc<PathCodec>,
    virtual_root_key: String,
    view_marker: String,
}

impl ModelGraphTraverser {
    /// Traverser using the shared codec and default keys.
    #[must_use]
    pub fn new() -> Self {
        Self::with_codec(PathCodec::shared())
    }

    /// Traverser using `codec` and default keys.
    #[must_use]
    pub fn with_codec(codec: Arc<PathCodec>) -> Self {
        Self {
            codec,
            virtual_root_key: VH_ROOT_KEY.to_string(),
            view_marker: VIEW_MARKER.to_string(),
        }
    }

    /// Traverser using `codec` with keys taken from `config`.
    #[must_use]
    pub fn from_config(config: &Config, codec: Arc<PathCodec>) -> Self {
        Self::with_codec(codec)
            .with_virtual_root_key(config.virtual_root_key())
            .with_view_marker(config.view_marker())
    }

    /// Read the virtual-root path from a different environment key.
    #[must_use]
    pub fn with_virtual_root_key(mut self, key: impl Into<String>) -> Self {
        self.virtual_root_key = key.into();
        self
    }

    /// Use a different view-marker prefix.
    ///
    /// An empty marker would match every segment, so it is ignored and the
    /// current marker is kept.
    #[must_use]
    pub fn with_view_marker(mut self, marker: impl Into<String>) -> Self {
        let marker = marker.into();
        if marker.is_empty() {
            log::warn!("ignoring empty view marker, keeping {:?}", self.view_marker);
        } else {
            self.view_marker = marker;
        }
        self
    }

    /// The environment key read for the virtual-root path.
    #[must_use]
    pub fn virtual_root_key(&self) -> &str {
        &self.virtual_root_key
    }

    /// Work out the path to walk and the subpath supplied by routing.
    fn request_path(&self, environ: &Environ) -> Result<(String, Vec<String>)> {
        let Some(matchdict) = environ.matchdict() else {
            let path = match environ.path_info() {
                Some(path) if !path.is_empty() => path.to_string(),
                _ => "/".to_string(),
            };
            return Ok((path, Vec::new()));
        };

        let path = match matchdict.get(TRAVERSE_KEY) {
            Some(PathSpec::Segments(segments)) => {
                let mut absolute = Vec::with_capacity(segments.len() + 1);
                absolute.push(String::new());
                absolute.extend(segments.iter().cloned());
                self.codec.join_segments(&absolute)
            }
            Some(PathSpec::Text(text)) => text.clone(),
            None => "/".to_string(),
        };

        let subpath = match matchdict.get(SUBPATH_KEY) {
            Some(PathSpec::Segments(segments)) => segments.clone(),
            Some(PathSpec::Text(text)) => self.codec.decode_path(text)?.to_vec(),
            None => Vec::new(),
        };

        Ok((path, subpath))
    }
}

impl Default for ModelGraphTraverser {
    fn default() -> Self {
        Self::new()
    }
}

/// State shared by every exit of a single walk.
struct Walk<'a> {
    root: &'a ModelRef,
    vroot_tuple: &'a PathTuple,
    vpath_tuple: &'a PathTuple,
}

impl Walk<'_> {
    /// Result for a walk that stopped at segment `index`.
    ///
    /// `traversed` covers the virtual-root prefix plus the segments walked
    /// past it, so it is never shorter than `virtual_root_path`.
    fn stop(
        &self,
        context: ModelRef,
        virtual_root: ModelRef,
        view_name: &str,
        index: usize,
    ) -> TraversalResult {
        let consumed = (self.vroot_tuple.len() + index).min(self.vpath_tuple.len());
        TraversalResult {
            context,
            view_name: view_name.to_string(),
            subpath: self.vpath_tuple[index + 1..].to_vec(),
            traversed: self.vpath_tuple[..consumed].to_vec(),
            root: Arc::clone(self.root),
            virtual_root,
            virtual_root_path: self.vroot_tuple.to_vec(),
        }
    }
}

impl Traverser for ModelGraphTraverser {
    fn resolve(&self, root: &ModelRef, environ: &Environ) -> Result<TraversalResult> {
        let (path, subpath) = self.request_path(environ)?;

        let (vroot_tuple, vpath) = match environ.get(&self.virtual_root_key) {
            Some(vroot_path) => {
                let vroot_tuple = self.codec.decode_path(vroot_path)?;
                (vroot_tuple, format!("{vroot_path}{path}"))
            }
            None => (PathTuple::from(Vec::new()), path),
        };
        let vroot_idx = vroot_tuple.len().checked_sub(1);

        let vpath_tuple = if vpath.is_empty() || vpath == "/" {
            PathTuple::from(Vec::new())
        } else {
            self.codec.decode_path(&vpath)?
        };

        let walk = Walk {
            root,
            vroot_tuple: &vroot_tuple,
            vpath_tuple: &vpath_tuple,
        };

        let mut ob = Arc::clone(root);
        let mut vroot = Arc::clone(root);

        for (i, segment) in vpath_tuple.iter().enumerate() {
            if let Some(view_name) = segment.strip_prefix(self.view_marker.as_str()) {
                log::debug!("traversal stopped at view marker {segment:?}");
                return Ok(walk.stop(ob, vroot, view_name, i));
            }

            let Some(container) = ob.as_container() else {
                log::debug!("traversal stopped at {segment:?}: context has no children");
                return Ok(walk.stop(ob, vroot, segment, i));
            };

            let Some(next) = container.get(segment) else {
                log::debug!("traversal stopped at {segment:?}: no such child");
                return Ok(walk.stop(ob, vroot, segment, i));
            };

            if Some(i) == vroot_idx {
                log::debug!("virtual root reached at {segment:?}");
                vroot = Arc::clone(&next);
            }
            ob = next;
        }

        Ok(TraversalResult {
            context: ob,
            view_name: String::new(),
            subpath,
            traversed: vpath_tuple.to_vec(),
            root: Arc::clone(root),
            virtual_root: vroot,
            virtual_root_path: vroot_tuple.to_vec(),
        })
    }
}
