use bmssp::graph::{Graph, MutableGraph};
use bmssp::{sssp, Dijkstra, DirectedGraph};

fn main() {
    env_logger::init();

    let mut graph = DirectedGraph::new(5);

    graph.add_edge(0, 1, 10.0).unwrap();
    graph.add_edge(0, 2, 5.0).unwrap();
    graph.add_edge(1, 3, 1.0).unwrap();
    graph.add_edge(2, 1, 3.0).unwrap();
    graph.add_edge(2, 3, 9.0).unwrap();
    graph.add_edge(2, 4, 2.0).unwrap();
    graph.add_edge(3, 4, 4.0).unwrap();
    graph.add_edge(4, 0, 7.0).unwrap();
    graph.add_edge(4, 3, 6.0).unwrap();

    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let (d, pred) = sssp(&graph, source).unwrap();
    println!("\nbmssp results:");
    for v in 0..graph.vertex_count() {
        if d[v].is_finite() {
            println!("  distance to {v}: {:.1} (pred {:?})", d[v], pred[v]);
        } else {
            println!("  no path to {v}");
        }
    }

    let dijkstra = Dijkstra::new();
    let (dd, _) = dijkstra.compute_shortest_paths(&graph, source).unwrap();
    println!("\ndijkstra results (oracle):");
    for (v, &dist) in dd.iter().enumerate() {
        if dist.is_finite() {
            println!("  distance to {v}: {:.1}", dist);
        } else {
            println!("  no path to {v}");
        }
    }
}
