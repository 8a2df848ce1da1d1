//! A* search

use std::fmt::Debug;
use std::hash::Hash;

use super::score::PriorityQueue;
use super::{accumulate, estimate, step_cost, Candidate, Priority, SearchAlgorithm, SearchOptions, Searcher};
use crate::errors::Result;
use crate::expansion::Expansion;
use crate::graph::Graph;
use crate::traits::{Cost, EdgeWeight, Heuristic, Weight};

/// Orders candidates by cost so far plus the estimate to the goal.
#[derive(Debug)]
pub(crate) struct EstimatePriority<'a, C, H> {
    cost: &'a C,
    heuristic: &'a H,
}

impl<'a, N, W, C, H> Priority<N, W> for EstimatePriority<'a, C, H>
where
    N: Debug,
    W: Weight,
    C: Cost<N, W>,
    H: Heuristic<N, W>,
{
    fn origin(&self, node: &N) -> Result<W> {
        estimate(self.heuristic, node)
    }

    fn step(&self, parent: &Candidate<N, W>, node: &N, edge: W) -> Result<(W, W)> {
        let step = step_cost(self.cost, &parent.node, node, edge)?;
        let cost = accumulate(parent.cost, step, node)?;
        Ok((cost, accumulate(cost, estimate(self.heuristic, node)?, node)?))
    }
}

pub(crate) type AStarSearcher<'g, 'a, N, W, C, H> =
    SearchAlgorithm<'g, N, W, PriorityQueue<N, W>, EstimatePriority<'a, C, H>>;

pub(crate) fn build<'g, 'a, N, W, C, H>(
    graph: &'g Graph<N, W>,
    options: &SearchOptions,
    cost: &'a C,
    heuristic: &'a H,
) -> AStarSearcher<'g, 'a, N, W, C, H>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    C: Cost<N, W>,
    H: Heuristic<N, W>,
{
    SearchAlgorithm::new(graph, EstimatePriority { cost, heuristic }, options)
}

/// A* search using the graph's edge weights.
///
/// With an admissible heuristic the path returned is a cheapest one.
pub fn astar<N, W, H>(graph: &Graph<N, W>, origin: N, goal: N, heuristic: &H) -> Result<Expansion<N>>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    H: Heuristic<N, W>,
{
    Searcher::new(graph).astar(origin, goal, &EdgeWeight, heuristic)
}

/// A* search with step costs supplied by `cost`.
pub fn astar_with<N, W, C, H>(
    graph: &Graph<N, W>,
    origin: N,
    goal: N,
    cost: &C,
    heuristic: &H,
) -> Result<Expansion<N>>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    C: Cost<N, W>,
    H: Heuristic<N, W>,
{
    Searcher::new(graph).astar(origin, goal, cost, heuristic)
}
