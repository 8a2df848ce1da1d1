use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;
use crate::traits::Weight;

/// The outcome of a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<N> {
    /// Nodes in the order they were expanded.
    ///
    /// When the goal is found it is the last entry.
    pub visited: Vec<N>,

    /// The path from start to goal, or None when the goal
    /// could not be reached.
    pub path: Option<Vec<N>>,
}

impl<N> Expansion<N> {
    pub(crate) fn found(visited: Vec<N>, path: Vec<N>) -> Self {
        Self {
            visited,
            path: Some(path),
        }
    }

    pub(crate) fn exhausted(visited: Vec<N>) -> Self {
        Self {
            visited,
            path: None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

impl<N> Expansion<N>
where
    N: Debug + Clone + Hash + Eq,
{
    /// Nodes of `graph` which this search never expanded,
    /// in graph order.
    pub fn unexpanded<W>(&self, graph: &Graph<N, W>) -> Vec<N>
    where
        W: Copy,
    {
        let visited: HashSet<&N> = self.visited.iter().collect();
        graph
            .nodes()
            .filter(|n| !visited.contains(n))
            .cloned()
            .collect()
    }

    /// Total weight of the path found, measured on `graph`.
    pub fn cost<W>(&self, graph: &Graph<N, W>) -> Option<W>
    where
        W: Weight,
    {
        self.path.as_ref().and_then(|p| graph.path_weight(p))
    }
}
