use std::collections::HashSet;
use std::thread;

use searcher::{
    astar, bfs, dfs, greedy, search, ucs, EdgeWeight, Expansion, Graph, NoHeuristic, Result,
    Searcher, Strategy,
};

fn figure1() -> Graph<String> {
    include_str!("../../graphs/figure1.txt").parse().unwrap()
}

fn letters(node: &String) -> usize {
    (node.as_bytes()[0] as i64 - b'G' as i64).abs() as usize
}

fn s(node: &str) -> String {
    node.to_string()
}

fn path(nodes: &[&str]) -> Option<Vec<String>> {
    Some(nodes.iter().map(|n| n.to_string()).collect())
}

/// A ladder with a cheap rail and an expensive rail,
/// with rungs of varying weight between them.
fn ladder() -> Graph<u32, u32> {
    let mut graph = Graph::new();
    for i in 0..6 {
        graph.add_edge(i, i + 1, 1 + i % 3);
        graph.add_edge(10 + i, 10 + i + 1, 1);
        graph.add_edge(i, 10 + i, 2 + (i * 7) % 4);
    }
    graph.add_edge(6, 16, 9);
    graph
}

fn reachable<W: Copy>(graph: &Graph<u32, W>, origin: u32) -> HashSet<u32> {
    let mut seen = HashSet::new();
    let mut stack = vec![origin];
    while let Some(node) = stack.pop() {
        if seen.insert(node) {
            stack.extend(graph.neighbors(&node).iter().map(|(n, _)| *n));
        }
    }
    seen
}

/// Exhaustively find the cheapest and the shortest simple paths.
fn brute_force(graph: &Graph<u32, u32>, origin: u32, goal: u32) -> (u32, usize) {
    fn walk(
        graph: &Graph<u32, u32>,
        node: u32,
        goal: u32,
        seen: &mut Vec<u32>,
        cost: u32,
        best: &mut (u32, usize),
    ) {
        if node == goal {
            best.0 = best.0.min(cost);
            best.1 = best.1.min(seen.len() - 1);
            return;
        }
        for (next, weight) in graph.neighbors(&node) {
            if !seen.contains(next) {
                seen.push(*next);
                walk(graph, *next, goal, seen, cost + weight, best);
                seen.pop();
            }
        }
    }

    let mut best = (u32::MAX, usize::MAX);
    walk(graph, origin, goal, &mut vec![origin], 0, &mut best);
    best
}

#[test]
fn golden_figure1() {
    let graph = figure1();

    let expected = vec![
        (Strategy::DepthFirst, vec!["S", "B", "C", "G"], vec!["S", "B", "C", "G"]),
        (
            Strategy::BreadthFirst,
            vec!["S", "A", "B", "C", "D", "G"],
            vec!["S", "A", "C", "G"],
        ),
        (
            Strategy::UniformCost,
            vec!["S", "A", "B", "C", "D", "G"],
            vec!["S", "B", "C", "G"],
        ),
        (Strategy::Greedy, vec!["S", "B", "C", "G"], vec!["S", "B", "C", "G"]),
        (Strategy::AStar, vec!["S", "A", "B", "C", "G"], vec!["S", "B", "C", "G"]),
    ];

    for (strategy, visited, route) in expected {
        let result = search(strategy, &graph, s("S"), s("G"), &EdgeWeight, &letters).unwrap();
        assert_eq!(
            result.visited,
            path(&visited).unwrap(),
            "{} expansion order",
            strategy
        );
        assert_eq!(result.path, path(&route), "{} path", strategy);
    }

    assert_eq!(ucs(&graph, s("S"), s("G")).unwrap().cost(&graph), Some(8));
    assert_eq!(
        astar(&graph, s("S"), s("G"), &letters).unwrap().cost(&graph),
        Some(8)
    );
}

#[test]
fn start_is_goal() {
    let graph = ladder();

    for strategy in Strategy::all() {
        let result = search(strategy, &graph, 3, 3, &EdgeWeight, &NoHeuristic).unwrap();
        assert_eq!(result, Expansion { visited: vec![3], path: Some(vec![3]) });
    }
}

#[test]
fn unreachable_goal() {
    let mut graph = ladder();
    graph.add_edge(100, 101, 1);
    let component = reachable(&graph, 0);

    for strategy in Strategy::all() {
        let result = search(strategy, &graph, 0, 101, &EdgeWeight, &NoHeuristic).unwrap();
        assert_eq!(result.path, None, "{}", strategy);

        let visited: HashSet<u32> = result.visited.iter().copied().collect();
        assert_eq!(visited.len(), result.visited.len(), "{} revisited", strategy);
        assert!(visited.is_subset(&component), "{}", strategy);
    }
}

#[test]
fn paths_are_walks() {
    let graph = ladder();

    for goal in graph.nodes().copied().collect::<Vec<_>>() {
        for strategy in Strategy::all() {
            let result = search(strategy, &graph, 0, goal, &EdgeWeight, &NoHeuristic).unwrap();
            let route = result.path.unwrap();

            assert_eq!(route.first(), Some(&0));
            assert_eq!(route.last(), Some(&goal));
            assert_eq!(result.visited.last(), Some(&goal));
            assert!(graph.is_walk(&route), "{} to {}", strategy, goal);
        }
    }
}

#[test]
fn bfs_fewest_edges() {
    let mut graph: Graph<u32, u32> = Graph::new();
    for (a, b) in &[(0, 1), (1, 2), (2, 3), (3, 4), (0, 5), (5, 4), (1, 6), (6, 4)] {
        graph.connect(*a, *b);
    }

    for goal in 0..7 {
        let result = bfs(&graph, 0, goal).unwrap();
        let (_, edges) = brute_force(&graph, 0, goal);
        assert_eq!(result.path.unwrap().len() - 1, edges, "goal {}", goal);
    }
}

#[test]
fn cheapest_paths() {
    let graph = ladder();

    for goal in graph.nodes().copied().collect::<Vec<_>>() {
        let (cheapest, _) = brute_force(&graph, 0, goal);
        // Every edge weighs at least one, so this never overestimates.
        let heuristic = move |node: &u32| if *node == goal { 0 } else { 1 };

        let result = ucs(&graph, 0, goal).unwrap();
        assert_eq!(result.cost(&graph), Some(cheapest), "ucs to {}", goal);

        let result = astar(&graph, 0, goal, &heuristic).unwrap();
        assert_eq!(result.cost(&graph), Some(cheapest), "astar to {}", goal);
    }
}

#[test]
fn greedy_can_be_worse() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("S", "A", 1);
    graph.add_edge("A", "B", 1);
    graph.add_edge("B", "G", 1);
    graph.add_edge("S", "X", 4);
    graph.add_edge("X", "G", 4);

    // True distances to G: S 3, A 2, B 1, X 4.
    let heuristic = |node: &&str| match *node {
        "S" => 3,
        "A" => 2,
        "B" => 1,
        "X" => 1,
        _ => 0,
    };

    let fast = greedy(&graph, "S", "G", &heuristic).unwrap();
    let best = ucs(&graph, "S", "G").unwrap();
    let informed = astar(&graph, "S", "G", &heuristic).unwrap();

    assert_eq!(fast.path, Some(vec!["S", "X", "G"]));
    assert_eq!(best.path, Some(vec!["S", "A", "B", "G"]));
    assert_eq!(informed.path, best.path);
    assert!(fast.cost(&graph) > best.cost(&graph));
}

#[test]
fn dfs_is_not_minimal() {
    let graph = figure1();
    let result = dfs(&graph, s("S"), s("D")).unwrap();

    // G is popped (and expanded) before D.
    assert_eq!(result.path, path(&["S", "B", "C", "G", "D"]));
    assert_eq!(result.cost(&graph), Some(9));
    assert!(result.cost(&graph) > ucs(&graph, s("S"), s("D")).unwrap().cost(&graph));
}

#[test]
fn idempotent() {
    let graph = figure1();
    let searcher = Searcher::new(&graph);

    let run = |strategy: Strategy| -> Result<Expansion<String>> {
        searcher.search(strategy, s("S"), s("G"), &EdgeWeight, &letters)
    };

    for strategy in Strategy::all() {
        assert_eq!(run(strategy).unwrap(), run(strategy).unwrap());
    }
}

#[test]
fn shared_between_threads() {
    fn assert_sync<T: Send + Sync>(_: &T) {}

    let graph = figure1();
    assert_sync(&graph);

    let expected: Vec<_> = Strategy::all()
        .map(|strategy| search(strategy, &graph, s("S"), s("G"), &EdgeWeight, &letters).unwrap())
        .collect();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = Strategy::all()
            .map(|strategy| {
                let graph = &graph;
                scope.spawn(move || {
                    search(strategy, graph, s("S"), s("G"), &EdgeWeight, &letters).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, expected);
}
