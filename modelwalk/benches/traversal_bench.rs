use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modelwalk::environ::VH_ROOT_KEY;
use modelwalk::tree::{TreeNode, TreeSpec};
use modelwalk::{BasicRequest, Environ, ModelGraphTraverser, Resolver, Traverser};
use std::sync::Arc;

/// A chain `/n0/n1/.../n{depth-1}` where every level also has a few siblings.
fn build_tree(depth: usize) -> Arc<TreeNode> {
    let mut spec = TreeSpec::leaf();
    for level in (0..depth).rev() {
        let mut folder = TreeSpec::folder().with_child(format!("n{level}"), spec);
        for sibling in 0..8 {
            folder = folder.with_child(format!("s{level}-{sibling}"), TreeSpec::leaf());
        }
        spec = folder;
    }
    spec.build()
}

fn path_for(depth: usize) -> String {
    (0..depth).map(|level| format!("/n{level}")).collect()
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let traverser = ModelGraphTraverser::new();

    for depth in [1usize, 5, 20] {
        let root = build_tree(depth).as_model();
        let environ = Environ::for_path(path_for(depth));

        group.bench_with_input(BenchmarkId::new("full_walk", depth), &environ, |b, environ| {
            b.iter(|| traverser.resolve(black_box(&root), black_box(environ)));
        });

        let with_view = Environ::for_path(format!("{}/@@edit/x/y", path_for(depth)));
        group.bench_with_input(BenchmarkId::new("view_marker", depth), &with_view, |b, environ| {
            b.iter(|| traverser.resolve(black_box(&root), black_box(environ)));
        });
    }

    let root = build_tree(5).as_model();
    let environ = Environ::for_path("/n1/n2/n3/n4").with_var(VH_ROOT_KEY, "/n0");
    group.bench_function("virtual_root", |b| {
        b.iter(|| traverser.resolve(black_box(&root), black_box(&environ)));
    });

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    let resolver = Resolver::new();
    let tree = build_tree(10);
    let root = tree.as_model();
    let names: Vec<String> = (0..10).map(|level| format!("n{level}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let deepest = tree.descendant(&names).map(|node| node.as_model()).unwrap_or_else(|| root.clone());

    group.bench_function("model_path", |b| {
        b.iter(|| resolver.model_path(black_box(&deepest), &[]));
    });

    let path = resolver.model_path(&deepest, &[]);
    group.bench_function("find_model", |b| {
        b.iter(|| resolver.find_model(black_box(&root), black_box(path.as_str())));
    });

    let request = BasicRequest::blank("/").with_application_url("http://example.com");
    group.bench_function("model_url", |b| {
        b.iter(|| resolver.model_url(black_box(&deepest), &request));
    });

    group.finish();
}

criterion_group!(benches, bench_traverse, bench_locate);
criterion_main!(benches);
