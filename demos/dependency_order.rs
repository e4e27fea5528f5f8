//! Build-dependency resolution on a directed graph: detect cycles, then
//! emit a build order with a post-order walk.

use anyhow::{bail, Result};
use trellis::{algo, traverse, GraphBuilder, GraphView};

fn main() -> Result<()> {
    // target -> dependency
    let mut deps = GraphBuilder::directed().build::<&str>();
    for (target, dependency) in [
        ("app", "ui"),
        ("app", "core"),
        ("ui", "render"),
        ("ui", "core"),
        ("render", "math"),
        ("core", "math"),
    ] {
        deps.put_edge(target, dependency)?;
    }

    println!(
        "{} targets, {} dependency edges",
        deps.node_count(),
        deps.edge_count()
    );

    if algo::has_cycle(&deps) {
        bail!("dependency cycle detected");
    }

    // Post-order yields dependencies before their dependents.
    let build_order: Vec<&str> = traverse::for_graph_view(&deps)
        .depth_first_post_order("app")
        .collect();
    println!("build order: {}", build_order.join(" -> "));

    let reachable = algo::reachable_nodes(&deps, &"ui");
    println!(
        "building 'ui' requires {} crates",
        reachable.len(),
    );
    Ok(())
}
