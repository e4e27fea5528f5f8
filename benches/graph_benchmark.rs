use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::graphmap::DiGraphMap;
use trellis::{GraphBuilder, GraphView, NetworkBuilder, NetworkView};

const NODES: u32 = 1_000;

fn ring_edges() -> impl Iterator<Item = (u32, u32)> {
    (0..NODES).map(|n| (n, (n + 1) % NODES))
}

fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    group.bench_function("trellis_directed_graph", |b| {
        b.iter(|| {
            let mut graph = GraphBuilder::directed()
                .expected_node_count(NODES as usize)
                .build();
            for (u, v) in ring_edges() {
                graph.put_edge(u, v).unwrap();
            }
            black_box(graph.edge_count())
        });
    });

    group.bench_function("petgraph_digraphmap", |b| {
        b.iter(|| {
            let mut graph = DiGraphMap::<u32, ()>::new();
            for (u, v) in ring_edges() {
                graph.add_edge(u, v, ());
            }
            black_box(graph.edge_count())
        });
    });

    group.bench_function("trellis_directed_network", |b| {
        b.iter(|| {
            let mut network = NetworkBuilder::directed()
                .expected_node_count(NODES as usize)
                .expected_edge_count(NODES as usize)
                .build();
            for (edge, (u, v)) in ring_edges().enumerate() {
                network.add_edge(u, v, edge).unwrap();
            }
            black_box(network.edge_count())
        });
    });

    group.finish();
}

fn bench_adjacency_queries(c: &mut Criterion) {
    let graph = GraphBuilder::directed()
        .build_from_edges(ring_edges())
        .unwrap();
    let petgraph: DiGraphMap<u32, ()> = ring_edges().collect();

    let mut group = c.benchmark_group("successor_scan");
    group.bench_function("trellis", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for node in graph.nodes() {
                total += graph.successors(node).count();
            }
            black_box(total)
        });
    });
    group.bench_function("petgraph", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for node in petgraph.nodes() {
                total += petgraph.neighbors(node).count();
            }
            black_box(total)
        });
    });
    group.finish();
}

fn bench_hot_key_lookups(c: &mut Criterion) {
    // The access pattern the retrieval cache targets: a handful of hot
    // nodes queried repeatedly on a sorted-order graph.
    let graph = GraphBuilder::directed()
        .node_order(trellis::ElementOrder::Sorted)
        .build_from_edges(ring_edges())
        .unwrap();

    c.bench_function("hot_key_degree_lookups", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for _ in 0..64 {
                total += graph.degree(&3);
                total += graph.degree(&700);
            }
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    bench_edge_insertion,
    bench_adjacency_queries,
    bench_hot_key_lookups
);
criterion_main!(benches);
