//! An in-memory model graph.
//!
//! [`TreeNode`] is a ready-made [`Model`] for applications that do not have
//! their own node types, and the graph the CLI loads from YAML. Trees are
//! described by a [`TreeSpec`] and frozen by [`TreeSpec::build`]; children hold
//! weak references to their parents, so the caller must keep the root alive
//! for parent lookups to succeed.
//!
//! # YAML format
//!
//! ```yaml
//! kind: site
//! children:
//!   blog:
//!     kind: folder
//!     children:
//!       first-post:
//!         leaf: true
//!   about: {}
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Weak};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Container, Model, ModelRef};

/// Declarative description of a model tree.
///
/// # Examples
///
/// ```
/// use modelwalk::tree::TreeSpec;
///
/// let spec: TreeSpec = serde_yaml::from_str(
///     "children:\n  a:\n    children:\n      b: { leaf: true }\n",
/// ).unwrap();
/// let root = spec.build();
/// assert!(root.descendant(&["a", "b"]).unwrap().is_leaf());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeSpec {
    /// Free-form type tag, usable with [`find_interface`](crate::find_interface).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Leaves do not support child lookup at all.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub leaf: bool,

    /// Children by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, TreeSpec>,
}

impl TreeSpec {
    /// A node that can hold children.
    #[must_use]
    pub fn folder() -> Self {
        Self::default()
    }

    /// A node without child lookup.
    #[must_use]
    pub fn leaf() -> Self {
        Self {
            leaf: true,
            ..Self::default()
        }
    }

    /// Set the type tag.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Add a child.
    #[must_use]
    pub fn with_child(mut self, name: impl Into<String>, child: TreeSpec) -> Self {
        self.children.insert(name.into(), child);
        self
    }

    /// Parse a spec from YAML and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or the spec fails
    /// [`validate`](Self::validate).
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let spec: Self = serde_yaml::from_str(contents)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Load a spec from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read model tree: {e}"),
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Check structural rules: leaves have no children, child names are
    /// non-empty and are not `.` or `..` (those could never be traversed).
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending node.
    pub fn validate(&self) -> Result<()> {
        self.validate_at("")
    }

    fn validate_at(&self, location: &str) -> Result<()> {
        if self.leaf && !self.children.is_empty() {
            return Err(Error::Validation {
                field: format!("{location}/"),
                message: "a leaf cannot have children".into(),
            });
        }
        for (name, child) in &self.children {
            if name.is_empty() || name == "." || name == ".." {
                return Err(Error::Validation {
                    field: format!("{location}/{name}"),
                    message: "child names must be non-empty and not '.' or '..'".into(),
                });
            }
            child.validate_at(&format!("{location}/{name}"))?;
        }
        Ok(())
    }

    /// Freeze the spec into a graph and return its root.
    #[must_use]
    pub fn build(&self) -> Arc<TreeNode> {
        self.build_node(None, Weak::new())
    }

    fn build_node(&self, name: Option<String>, parent: Weak<TreeNode>) -> Arc<TreeNode> {
        Arc::new_cyclic(|me| TreeNode {
            name,
            kind: self.kind.clone(),
            parent,
            children: (!self.leaf).then(|| {
                self.children
                    .iter()
                    .map(|(child_name, spec)| {
                        let child = spec.build_node(Some(child_name.clone()), me.clone());
                        (child_name.clone(), child)
                    })
                    .collect()
            }),
        })
    }
}

/// A node of a tree built from a [`TreeSpec`].
#[derive(Debug)]
pub struct TreeNode {
    name: Option<String>,
    kind: Option<String>,
    parent: Weak<TreeNode>,
    children: Option<BTreeMap<String, Arc<TreeNode>>>,
}

impl TreeNode {
    /// The node's type tag.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Whether this node lacks child lookup.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Direct child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<Arc<TreeNode>> {
        self.children.as_ref()?.get(name).cloned()
    }

    /// Names of the direct children, in order.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children
            .iter()
            .flat_map(|children| children.keys().map(String::as_str))
    }

    /// Follow `path` down from this node.
    #[must_use]
    pub fn descendant(self: &Arc<Self>, path: &[&str]) -> Option<Arc<TreeNode>> {
        path.iter()
            .try_fold(Arc::clone(self), |node, name| node.child(name))
    }

    /// This node as a [`ModelRef`].
    #[must_use]
    pub fn as_model(self: &Arc<Self>) -> ModelRef {
        Arc::clone(self) as ModelRef
    }
}

impl Model for TreeNode {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn parent(&self) -> Option<ModelRef> {
        self.parent.upgrade().map(|parent| parent as ModelRef)
    }

    fn as_container(&self) -> Option<&dyn Container> {
        self.children.as_ref().map(|_| self as &dyn Container)
    }
}

impl Container for TreeNode {
    fn get(&self, name: &str) -> Option<ModelRef> {
        self.child(name).map(|child| child as ModelRef)
    }
}
