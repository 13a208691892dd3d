//! The outcome of a traversal.

use crate::model::ModelRef;

/// Where traversal stopped and how the request path was split.
///
/// | field | meaning |
/// |-------|---------|
/// | `context` | the node selected to handle the request |
/// | `view_name` | the segment following the context, or empty |
/// | `subpath` | segments following `view_name` |
/// | `traversed` | segments consumed to reach `context`, from the physical root |
/// | `root` | the node traversal started from |
/// | `virtual_root` | the node acting as root for URL generation |
/// | `virtual_root_path` | segments consumed to reach `virtual_root` |
#[derive(Debug, Clone)]
pub struct TraversalResult {
    /// The node selected to handle the request.
    pub context: ModelRef,
    /// Decoded name of the view to invoke on the context.
    pub view_name: String,
    /// Segments following the view name, passed through unresolved.
    pub subpath: Vec<String>,
    /// Segments consumed to reach the context.
    pub traversed: Vec<String>,
    /// The node traversal started from.
    pub root: ModelRef,
    /// The effective root for URL purposes.
    pub virtual_root: ModelRef,
    /// Segments consumed to reach the virtual root.
    pub virtual_root_path: Vec<String>,
}

impl TraversalResult {
    /// A result that resolves to `root` itself with nothing left over.
    #[must_use]
    pub fn at_root(root: ModelRef) -> Self {
        Self {
            context: root.clone(),
            view_name: String::new(),
            subpath: Vec::new(),
            traversed: Vec::new(),
            virtual_root: root.clone(),
            root,
            virtual_root_path: Vec::new(),
        }
    }

    /// Whether the whole path resolved to a node, leaving no view name.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.view_name.is_empty()
    }
}
