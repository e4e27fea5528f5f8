//! A small transit map as an undirected network: stations are nodes, each
//! line segment is an identified edge, and two stations may be linked by
//! several parallel lines.

use anyhow::Result;
use trellis::{ImmutableNetwork, NetworkBuilder, NetworkView};

fn main() -> Result<()> {
    let mut map = NetworkBuilder::undirected()
        .allows_parallel_edges(true)
        .build::<&str, &str>();

    map.add_edge("central", "museum", "red-1")?;
    map.add_edge("central", "museum", "blue-4")?;
    map.add_edge("museum", "harbor", "red-2")?;
    map.add_edge("harbor", "airport", "shuttle")?;

    for station in ["central", "museum", "harbor"] {
        let lines: Vec<&str> = map.incident_edges(&station).copied().collect();
        println!("{station}: {} segments ({})", lines.len(), lines.join(", "));
    }

    let parallel: Vec<&str> = map
        .edges_connecting(&"central", &"museum")
        .copied()
        .collect();
    println!("central <-> museum served by: {}", parallel.join(", "));

    // Freeze the finished map; the snapshot can be shared across threads.
    let frozen = ImmutableNetwork::copy_of(&map);
    std::thread::scope(|scope| {
        for station in ["central", "airport"] {
            let frozen = &frozen;
            scope.spawn(move || {
                println!("{station} degree = {}", frozen.degree(&station));
            });
        }
    });
    Ok(())
}
