//! Brute-force verification that engine distances are optimal.
//!
//! For small graphs (well under 8 nodes of simple paths) we enumerate every
//! simple path from the source and check that the engine's distance equals
//! the cheapest enumerated path, and that the reported path's edge weights
//! sum to exactly that distance.

use dijk_core::{path_to, Engine, Graph, NodeId};

/// Enumerate all simple paths from `from` to `to` and return the cheapest
/// total weight, honoring `neighbors_of` adjacency semantics.
fn brute_force_distance(graph: &Graph, from: NodeId, to: NodeId) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: NodeId,
        target: NodeId,
        cost: f64,
        seen: &mut Vec<NodeId>,
        best: &mut Option<f64>,
    ) {
        if current == target {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for (next, weight) in graph.neighbors_of(current) {
            if seen.contains(&next) {
                continue;
            }
            seen.push(next);
            walk(graph, next, target, cost + weight, seen, best);
            seen.pop();
        }
    }

    let mut best = None;
    let mut seen = vec![from];
    walk(graph, from, to, 0.0, &mut seen, &mut best);
    best
}

fn solve(graph: &mut Graph) {
    let mut engine = Engine::new();
    engine.start(graph).unwrap();
    engine.run_to_completion(graph);
}

fn assert_optimal(graph: &Graph) {
    let source = graph.source().unwrap();
    for id in graph.node_ids() {
        let expected = brute_force_distance(graph, source, id);
        let actual = graph.node(id).distance;
        match expected {
            Some(best) => {
                assert_eq!(
                    actual, best,
                    "node {} has distance {} but brute force found {}",
                    graph.node(id).label, actual, best
                );
                // The reported path must sum to the reported distance.
                let path = path_to(graph, id).unwrap();
                let mut sum = 0.0;
                for pair in path.windows(2) {
                    let (a, b) = (pair[0], pair[1]);
                    let weight = graph
                        .neighbors_of(a)
                        .into_iter()
                        .filter(|(n, _)| *n == b)
                        .map(|(_, w)| w)
                        .fold(f64::INFINITY, f64::min);
                    sum += weight;
                }
                assert_eq!(sum, best, "path sum disagrees for {}", graph.node(id).label);
            }
            None => assert!(
                actual.is_infinite(),
                "node {} should be unreachable",
                graph.node(id).label
            ),
        }
    }
}

/// Dense-ish 6-node directed graph with a tempting expensive shortcut.
fn directed_fixture() -> Graph {
    let mut g = Graph::new();
    let n: Vec<NodeId> = (0..6).map(|i| g.add_node(i as f64, 0.0).unwrap()).collect();
    let edges = [
        (0, 1, 7.0),
        (0, 2, 9.0),
        (0, 5, 14.0),
        (1, 2, 10.0),
        (1, 3, 15.0),
        (2, 3, 11.0),
        (2, 5, 2.0),
        (3, 4, 6.0),
        (5, 4, 9.0),
    ];
    for (a, b, w) in edges {
        g.add_edge(n[a], n[b], w, true).unwrap();
    }
    g.set_source(n[0]);
    g
}

#[test]
fn directed_graph_matches_brute_force() {
    let mut g = directed_fixture();
    solve(&mut g);
    assert_optimal(&g);
    // Classic expected value for this fixture: node E via 0-2-5-4
    let e = g.find_by_label("E").unwrap();
    assert_eq!(g.node(e).distance, 20.0);
}

#[test]
fn undirected_graph_matches_brute_force() {
    let mut g = directed_fixture();
    g.set_directedness(false);
    solve(&mut g);
    assert_optimal(&g);
    let e = g.find_by_label("E").unwrap();
    assert_eq!(g.node(e).distance, 20.0);
}

#[test]
fn graph_with_unreachable_component() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0).unwrap();
    let b = g.add_node(1.0, 0.0).unwrap();
    let c = g.add_node(2.0, 0.0).unwrap();
    let d = g.add_node(3.0, 0.0).unwrap();
    g.add_edge(a, b, 3.0, true).unwrap();
    // C -> D is in a component the source cannot reach
    g.add_edge(c, d, 1.0, true).unwrap();
    g.set_source(a);
    solve(&mut g);
    assert_optimal(&g);
}

#[test]
fn parallel_edges_take_the_cheaper() {
    let mut g = Graph::new();
    let a = g.add_node(0.0, 0.0).unwrap();
    let b = g.add_node(1.0, 0.0).unwrap();
    g.add_edge(a, b, 5.0, true).unwrap();
    g.add_edge(a, b, 2.0, true).unwrap();
    g.set_source(a);
    solve(&mut g);
    assert_eq!(g.node(b).distance, 2.0);
    assert_optimal(&g);
}

#[test]
fn eight_node_mixed_weights() {
    let mut g = Graph::new();
    let n: Vec<NodeId> = (0..8).map(|i| g.add_node(i as f64, 0.0).unwrap()).collect();
    let edges = [
        (0, 1, 2.5),
        (0, 2, 1.0),
        (1, 3, 4.0),
        (2, 3, 7.5),
        (2, 4, 3.0),
        (3, 5, 1.0),
        (4, 5, 5.0),
        (4, 6, 2.0),
        (6, 5, 1.5),
        (5, 7, 2.0),
        (1, 7, 20.0),
    ];
    for (a, b, w) in edges {
        g.add_edge(n[a], n[b], w, true).unwrap();
    }
    g.set_source(n[0]);
    solve(&mut g);
    assert_optimal(&g);

    g.set_directedness(false);
    solve(&mut g);
    assert_optimal(&g);
}
