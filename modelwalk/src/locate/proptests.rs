//! Property-based tests for locating nodes by path.

use super::{find_model, find_root, model_path, model_path_tuple, Resolver};
use crate::environ::{BasicRequest, VH_ROOT_KEY};
use crate::model::same_model;
use crate::tree::TreeSpec;
use proptest::prelude::*;

// Names a node can be reached by: not a dot segment, not a view marker.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.%/@~\u{e9}-]{1,8}".prop_filter("untraversable name", |s| {
        s != "." && s != ".." && !s.starts_with("@@")
    })
}

fn paths_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(name_strategy(), 1..5), 1..10)
}

fn tree_from_paths(paths: &[Vec<String>]) -> TreeSpec {
    let mut spec = TreeSpec::folder();
    for path in paths {
        let mut cursor = &mut spec;
        for name in path {
            cursor = cursor.children.entry(name.clone()).or_default();
        }
    }
    spec
}

proptest! {
    // find_model(root, model_path(N)) == N
    #[test]
    fn model_path_round_trips(paths in paths_strategy()) {
        let root = tree_from_paths(&paths).build();
        for path in &paths {
            let names: Vec<&str> = path.iter().map(String::as_str).collect();
            let target = root.descendant(&names).unwrap().as_model();

            let by_string = find_model(&root.as_model(), model_path(&target, &[]).as_str()).unwrap();
            prop_assert!(same_model(&by_string, &target));

            let by_tuple = find_model(&target, model_path_tuple(&target, &[])).unwrap();
            prop_assert!(same_model(&by_tuple, &target));
        }
    }

    // Every node reports the tree's root
    #[test]
    fn find_root_is_shared(paths in paths_strategy()) {
        let root = tree_from_paths(&paths).build();
        for path in &paths {
            let names: Vec<&str> = path.iter().map(String::as_str).collect();
            let target = root.descendant(&names).unwrap().as_model();
            prop_assert!(same_model(&find_root(&target), &root.as_model()));
        }
    }

    // With the virtual root set to the first level, URLs drop that level
    #[test]
    fn url_under_virtual_root(paths in paths_strategy()) {
        let root = tree_from_paths(&paths).build();
        let resolver = Resolver::new();
        for path in &paths {
            let names: Vec<&str> = path.iter().map(String::as_str).collect();
            let target = root.descendant(&names).unwrap().as_model();
            let vroot = model_path(&root.descendant(&names[..1]).unwrap().as_model(), &[]);

            let mut request = BasicRequest::blank("/").with_application_url("http://h");
            request.environ_mut().insert(VH_ROOT_KEY, vroot.clone());
            let url = resolver.model_url(&target, &request).unwrap();

            let full = format!("{}/", model_path(&target, &[]));
            prop_assert_eq!(url, format!("http://h{}", &full[vroot.len()..]));
        }
    }
}
