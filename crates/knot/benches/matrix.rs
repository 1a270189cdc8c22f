//! Benchmarks for the matrix builders.
//!
//! These benchmarks measure:
//! - Adjacency matrix construction from the edge set
//! - All-pairs shortest paths (cubic in the vertex count)
//! - Depth-first traversal on the same graphs, for comparison

// Benchmark code - performance of the benchmark setup is not critical
#![allow(missing_docs)]
#![allow(clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use knot::Graph;

/// Ring of `size` vertices with a chord every third vertex.
fn generate_graph(size: usize) -> Graph {
    let mut graph = Graph::new();
    for i in 0..size {
        graph.add_vertex(&format!("v{i}")).expect("add vertex");
    }
    for i in 0..size {
        let next = (i + 1) % size;
        graph
            .add_edge(&format!("v{i}"), &format!("v{next}"), (i % 7 + 1) as u64)
            .expect("add ring edge");
        if i % 3 == 0 {
            let chord = (i + size / 2) % size;
            if chord != next {
                graph
                    .add_edge(&format!("v{i}"), &format!("v{chord}"), 11)
                    .expect("add chord edge");
            }
        }
    }
    graph
}

fn bench_adjacency_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency_matrix");

    for size in &[16usize, 64, 256] {
        let graph = generate_graph(*size);
        group.throughput(Throughput::Elements((*size * *size) as u64));
        group.bench_with_input(BenchmarkId::new("vertices", size), size, |b, _| {
            b.iter(|| black_box(graph.build_adjacency_matrix().expect("matrix")));
        });
    }

    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs_shortest_paths");
    group.sample_size(20);

    for size in &[16usize, 64, 128] {
        let graph = generate_graph(*size);
        group.bench_with_input(BenchmarkId::new("vertices", size), size, |b, _| {
            b.iter(|| black_box(graph.all_pairs_shortest_paths().expect("paths")));
        });
    }

    group.finish();
}

fn bench_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs_order");

    for size in &[64usize, 256] {
        let graph = generate_graph(*size);
        group.bench_with_input(BenchmarkId::new("vertices", size), size, |b, _| {
            b.iter(|| black_box(graph.dfs_order()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_adjacency_matrix,
    bench_shortest_paths,
    bench_dfs
);
criterion_main!(benches);
