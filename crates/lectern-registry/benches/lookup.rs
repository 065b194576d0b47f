//! Benchmarks for registry construction and lookups.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lectern_registry::{PageDescriptor, PageRegistry};

/// Create `count` descriptors with distinct path names and identifiers.
fn create_pages(count: usize) -> Vec<PageDescriptor> {
    (0..count)
        .map(|i| {
            PageDescriptor::new(
                format!("topic-{i}"),
                format!("Topic {i}"),
                format!("topic-id-{i}"),
            )
        })
        .collect()
}

fn bench_registry_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_build");

    for count in [10, 100, 1000] {
        let pages = create_pages(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &pages, |b, pages| {
            b.iter(|| PageRegistry::new(pages.clone()).unwrap());
        });
    }

    group.finish();
}

fn bench_registry_lookup(c: &mut Criterion) {
    let registry = PageRegistry::new(create_pages(100)).unwrap();

    let mut group = c.benchmark_group("registry_lookup");

    group.bench_function("resolve_by_path_hit", |b| {
        b.iter(|| registry.resolve_by_path("topic-42"));
    });

    group.bench_function("resolve_by_path_miss", |b| {
        b.iter(|| registry.resolve_by_path("nonexistent"));
    });

    group.bench_function("resolve_by_identifier_hit", |b| {
        b.iter(|| registry.resolve_by_identifier("topic-id-42"));
    });

    group.finish();
}

criterion_group!(benches, bench_registry_build, bench_registry_lookup);
criterion_main!(benches);
