//! Uniform cost search (Dijkstra's Algorithm)

use std::fmt::Debug;
use std::hash::Hash;

use super::score::PriorityQueue;
use super::{accumulate, step_cost, Candidate, Priority, SearchAlgorithm, SearchOptions, Searcher};
use crate::errors::Result;
use crate::expansion::Expansion;
use crate::graph::Graph;
use crate::traits::{Cost, EdgeWeight, Weight};

/// Orders candidates by the cost of the path so far.
#[derive(Debug)]
pub(crate) struct CostPriority<'c, C> {
    cost: &'c C,
}

impl<'c, N, W, C> Priority<N, W> for CostPriority<'c, C>
where
    N: Debug,
    W: Weight,
    C: Cost<N, W>,
{
    fn origin(&self, _node: &N) -> Result<W> {
        Ok(W::zero())
    }

    fn step(&self, parent: &Candidate<N, W>, node: &N, edge: W) -> Result<(W, W)> {
        let step = step_cost(self.cost, &parent.node, node, edge)?;
        let cost = accumulate(parent.cost, step, node)?;
        Ok((cost, cost))
    }
}

/// Search algorithm which implements Dijkstra's Algorithm for
/// graph searches.
pub(crate) type DijkstraSearch<'g, 'c, N, W, C> =
    SearchAlgorithm<'g, N, W, PriorityQueue<N, W>, CostPriority<'c, C>>;

/// Build a Dijkstra's Alogrithm Searcher
pub(crate) fn build<'g, 'c, N, W, C>(
    graph: &'g Graph<N, W>,
    options: &SearchOptions,
    cost: &'c C,
) -> DijkstraSearch<'g, 'c, N, W, C>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    C: Cost<N, W>,
{
    SearchAlgorithm::new(graph, CostPriority { cost }, options)
}

/// Perform a uniform cost search using the graph's edge weights.
///
/// Uniform cost search behaves like a breadth first search, but always
/// expands the next cheapest path even when paths end up with varying
/// lengths. The first time a node is popped it is reached by a cheapest
/// path, so no candidate is ever re-opened.
pub fn ucs<N, W>(graph: &Graph<N, W>, origin: N, goal: N) -> Result<Expansion<N>>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
{
    Searcher::new(graph).ucs(origin, goal, &EdgeWeight)
}

/// Uniform cost search with step costs supplied by `cost`
/// in place of the edge weights.
pub fn ucs_with<N, W, C>(graph: &Graph<N, W>, origin: N, goal: N, cost: &C) -> Result<Expansion<N>>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    C: Cost<N, W>,
{
    Searcher::new(graph).ucs(origin, goal, cost)
}
