//! Performance benchmarks for CourseBuilder core operations
//!
//! Run with: `cargo bench -p coursebuilder-core`
//!
//! These benchmarks measure critical path performance:
//! - Search tree rebuild + substring search (runs on every keystroke)
//! - Drag resolution over a large item collection

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use coursebuilder_core::index::SearchTree;
use coursebuilder_core::models::{Item, Module};
use coursebuilder_core::operations::{resolve_drag, DragEndpoint};

/// Generate N modules with varied names so the tree does not degrade to a
/// single chain.
fn generate_modules(count: usize) -> Vec<Module> {
    (0..count)
        .map(|i| {
            let name = match i % 4 {
                0 => format!("Week {} Overview", i),
                1 => format!("Unit {} Reading", i),
                2 => format!("Lab {} Materials", i),
                _ => format!("Module {} Review", i),
            };
            Module::with_id(format!("module-{i}"), name)
        })
        .collect()
}

/// Generate N items spread across the first `containers` modules.
fn generate_items(count: usize, containers: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let container = format!("module-{}", i % containers);
            let mut item = Item::link(
                format!("Resource {i}"),
                format!("https://example.com/{i}"),
                Some(&container),
            );
            item.id = format!("item-{i}");
            item
        })
        .collect()
}

fn bench_search_tree(c: &mut Criterion) {
    let modules = generate_modules(1000);

    c.bench_function("search_tree_rebuild_1000", |b| {
        b.iter(|| SearchTree::from_modules(black_box(&modules)))
    });

    let tree = SearchTree::from_modules(&modules);
    c.bench_function("search_tree_substring_query", |b| {
        b.iter(|| tree.search(black_box("reading")))
    });
}

fn bench_drag_resolution(c: &mut Criterion) {
    let modules = generate_modules(50);
    let items = generate_items(5000, 50);
    let source = DragEndpoint::Item("item-4999".to_string());
    let target = DragEndpoint::Module("module-0".to_string());

    c.bench_function("resolve_drag_5000_items", |b| {
        b.iter(|| {
            resolve_drag(
                black_box(&source),
                black_box(&target),
                black_box(&modules),
                black_box(&items),
            )
        })
    });
}

criterion_group!(benches, bench_search_tree, bench_drag_resolution);
criterion_main!(benches);
