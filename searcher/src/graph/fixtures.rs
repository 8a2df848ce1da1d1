//! Graphs shared by the unit tests.

use super::Graph;

/// The weighted example graph used throughout the tests.
///
/// The cheapest routes from S to G all cost 8.
pub(crate) fn figure1() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_edge("S", "A", 1);
    graph.add_edge("S", "B", 2);
    graph.add_edge("A", "B", 1);
    graph.add_edge("A", "C", 5);
    graph.add_edge("B", "C", 3);
    graph.add_edge("C", "D", 2);
    graph.add_edge("C", "G", 3);
    graph.add_edge("D", "G", 1);
    graph
}

/// The same shape as [figure1], with every edge of unit weight.
pub(crate) fn figure1_unweighted() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for (a, b) in &[
        ("S", "A"),
        ("S", "B"),
        ("A", "B"),
        ("A", "C"),
        ("B", "C"),
        ("C", "D"),
        ("C", "G"),
        ("D", "G"),
    ] {
        graph.connect(*a, *b);
    }
    graph
}

/// Distance between letters, as used with [figure1].
///
/// Not admissible on that graph (it overestimates from S, C and D).
pub(crate) fn letters(node: &&'static str) -> usize {
    let goal = b'G' as i64;
    (node.as_bytes()[0] as i64 - goal).abs() as usize
}

/// A cheap route through A and an expensive route through B.
///
/// Paired with [detour_heuristic], which is admissible but
/// lures greedy search down the expensive side.
pub(crate) fn detour() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_edge("S", "A", 1);
    graph.add_edge("A", "G", 1);
    graph.add_edge("S", "B", 5);
    graph.add_edge("B", "G", 5);
    graph
}

pub(crate) fn detour_heuristic(node: &&'static str) -> usize {
    match *node {
        "S" => 2,
        "A" => 1,
        _ => 0,
    }
}
