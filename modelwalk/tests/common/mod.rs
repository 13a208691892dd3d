//! Common test utilities for integration tests.
//!
//! Provides a YAML-described site tree and a small hand-written model graph
//! that implements [`Model`] directly instead of going through `TreeNode`.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use modelwalk::tree::{TreeNode, TreeSpec};
use modelwalk::{Container, Model, ModelRef};

/// A site with a blog, an about page and a nested archive.
pub const SITE_YAML: &str = r"
kind: site
children:
  blog:
    kind: folder
    children:
      first-post:
        kind: page
        leaf: true
      La Peña:
        kind: page
        leaf: true
  about:
    kind: page
    leaf: true
  archives:
    kind: folder
    children:
      '2024':
        kind: folder
        children:
          my archives:
            kind: folder
";

/// Builds the tree described by [`SITE_YAML`].
#[allow(dead_code)]
pub fn site() -> Arc<TreeNode> {
    TreeSpec::from_yaml_str(SITE_YAML)
        .expect("site fixture is valid")
        .build()
}

/// The node at `path` below `root`, as a model handle.
#[allow(dead_code)]
pub fn node(root: &Arc<TreeNode>, path: &[&str]) -> ModelRef {
    root.descendant(path)
        .unwrap_or_else(|| panic!("fixture has no node at {path:?}"))
        .as_model()
}

/// A product catalog: a container of products.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Catalog {
    pub title: String,
    name: Option<String>,
    parent: Option<Weak<Catalog>>,
    products: BTreeMap<String, Arc<Product>>,
    sections: BTreeMap<String, Arc<Catalog>>,
}

/// A product: a leaf without child lookup.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Product {
    pub sku: String,
    parent: Weak<Catalog>,
}

impl Model for Catalog {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn parent(&self) -> Option<ModelRef> {
        let parent = self.parent.as_ref()?.upgrade()?;
        Some(parent as ModelRef)
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }
}

impl Container for Catalog {
    fn get(&self, name: &str) -> Option<ModelRef> {
        if let Some(section) = self.sections.get(name) {
            return Some(Arc::clone(section) as ModelRef);
        }
        self.products
            .get(name)
            .map(|product| Arc::clone(product) as ModelRef)
    }
}

impl Model for Product {
    fn name(&self) -> Option<&str> {
        Some(&self.sku)
    }

    fn parent(&self) -> Option<ModelRef> {
        self.parent.upgrade().map(|parent| parent as ModelRef)
    }
}

/// `/` (catalog "Shop") with products `widget` and `gadget`, and a section
/// `tools` holding product `hammer`.
#[allow(dead_code)]
pub fn shop() -> Arc<Catalog> {
    Arc::new_cyclic(|root: &Weak<Catalog>| {
        let tools = Arc::new_cyclic(|tools: &Weak<Catalog>| Catalog {
            title: "Tools".into(),
            name: Some("tools".into()),
            parent: Some(root.clone()),
            products: product_map(tools, &["hammer"]),
            sections: BTreeMap::new(),
        });

        Catalog {
            title: "Shop".into(),
            name: None,
            parent: None,
            products: product_map(root, &["widget", "gadget"]),
            sections: BTreeMap::from([("tools".to_string(), tools)]),
        }
    })
}

#[allow(dead_code)]
fn product_map(parent: &Weak<Catalog>, skus: &[&str]) -> BTreeMap<String, Arc<Product>> {
    skus.iter()
        .map(|sku| {
            let product = Arc::new(Product {
                sku: (*sku).to_string(),
                parent: parent.clone(),
            });
            ((*sku).to_string(), product)
        })
        .collect()
}
