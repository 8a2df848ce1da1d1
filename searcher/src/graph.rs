//! Undirected, edge-weighted graphs.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::traits::Weight;

mod parse;

#[cfg(test)]
pub(crate) mod fixtures;

/// An undirected graph stored as adjacency lists.
///
/// Every edge is recorded twice, once under each endpoint,
/// so the adjacency is always symmetric. Neighbors are kept
/// in insertion order, which is the order searches generate
/// them in.
///
/// Duplicate edges and self-loops are accepted as-is and
/// simply produce repeated entries in the adjacency lists.
#[derive(Debug, Clone)]
pub struct Graph<N, W = usize>
where
    N: Eq + Hash,
{
    order: Vec<N>,
    edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> Default for Graph<N, W>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Self {
            order: Vec::new(),
            edges: HashMap::new(),
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Debug + Clone + Hash + Eq,
    W: Copy,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    fn adjacency(&mut self, node: N) -> &mut Vec<(N, W)> {
        if !self.edges.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.edges.entry(node).or_insert_with(Vec::new)
    }

    /// Add an edge between `a` and `b`, in both directions.
    pub fn add_edge(&mut self, a: N, b: N, weight: W) {
        self.adjacency(a.clone()).push((b.clone(), weight));
        self.adjacency(b).push((a, weight));
    }

    /// The neighbors of `node`, in the order the edges were added.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: &N) -> &[(N, W)] {
        self.edges.get(node).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Iterate over nodes in the order they were first added.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Is every consecutive pair of nodes in `walk` connected by an edge?
    pub fn is_walk(&self, walk: &[N]) -> bool {
        walk.windows(2)
            .all(|pair| self.neighbors(&pair[0]).iter().any(|(n, _)| n == &pair[1]))
    }
}

impl<N, W> Graph<N, W>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
{
    /// Add an edge of unit weight between `a` and `b`.
    pub fn connect(&mut self, a: N, b: N) {
        self.add_edge(a, b, W::one());
    }

    /// Total weight along a walk through the graph.
    ///
    /// When several edges join the same pair of nodes the lightest
    /// one is used. Returns None if the walk leaves the graph
    /// or the total overflows `W`.
    pub fn path_weight(&self, walk: &[N]) -> Option<W> {
        walk.windows(2).try_fold(W::zero(), |total, pair| {
            self.neighbors(&pair[0])
                .iter()
                .filter(|(n, _)| n == &pair[1])
                .map(|(_, w)| *w)
                .min()
                .and_then(|w| total.checked_add(&w))
        })
    }
}
