use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis::{algo, traverse, GraphBuilder};

const LAYERS: u32 = 10;

/// A layered DAG: every node of layer k points at two nodes of layer k+1.
fn layered_dag() -> trellis::Graph<u32> {
    let mut graph = GraphBuilder::directed().build();
    for layer in 0..LAYERS {
        let width = 1u32 << layer.min(6);
        for i in 0..width {
            let node = layer * 100 + i;
            let next_width = 1u32 << (layer + 1).min(6);
            for child in [(2 * i) % next_width, (2 * i + 1) % next_width] {
                if layer + 1 < LAYERS {
                    graph.put_edge(node, (layer + 1) * 100 + child).unwrap();
                }
            }
        }
    }
    graph
}

fn bench_traversals(c: &mut Criterion) {
    let graph = layered_dag();
    let mut group = c.benchmark_group("traversal");

    group.bench_function("breadth_first", |b| {
        b.iter(|| {
            let count = traverse::for_graph_view(&graph).breadth_first(0).count();
            black_box(count)
        });
    });

    group.bench_function("depth_first_pre_order", |b| {
        b.iter(|| {
            let count = traverse::for_graph_view(&graph)
                .depth_first_pre_order(0)
                .count();
            black_box(count)
        });
    });

    group.bench_function("depth_first_post_order", |b| {
        b.iter(|| {
            let count = traverse::for_graph_view(&graph)
                .depth_first_post_order(0)
                .count();
            black_box(count)
        });
    });

    group.finish();
}

fn bench_algorithms(c: &mut Criterion) {
    let graph = layered_dag();
    let mut group = c.benchmark_group("algorithms");

    group.bench_function("has_cycle", |b| {
        b.iter(|| black_box(algo::has_cycle(&graph)));
    });

    group.bench_function("reachable_nodes", |b| {
        b.iter(|| black_box(algo::reachable_nodes(&graph, &0).len()));
    });

    group.finish();
}

criterion_group!(benches, bench_traversals, bench_algorithms);
criterion_main!(benches);
