//! Greedy best-first search

use std::fmt::Debug;
use std::hash::Hash;

use super::score::PriorityQueue;
use super::{estimate, Candidate, Priority, SearchAlgorithm, SearchOptions, Searcher};
use crate::errors::Result;
use crate::expansion::Expansion;
use crate::graph::Graph;
use crate::traits::{Heuristic, Weight};

/// Orders candidates by the heuristic estimate alone,
/// ignoring the cost of reaching them.
#[derive(Debug)]
pub(crate) struct HeuristicPriority<'h, H> {
    heuristic: &'h H,
}

impl<'h, N, W, H> Priority<N, W> for HeuristicPriority<'h, H>
where
    N: Debug,
    W: Weight,
    H: Heuristic<N, W>,
{
    fn origin(&self, node: &N) -> Result<W> {
        estimate(self.heuristic, node)
    }

    fn step(&self, _parent: &Candidate<N, W>, node: &N, _edge: W) -> Result<(W, W)> {
        Ok((W::zero(), estimate(self.heuristic, node)?))
    }
}

pub(crate) type GreedySearch<'g, 'h, N, W, H> =
    SearchAlgorithm<'g, N, W, PriorityQueue<N, W>, HeuristicPriority<'h, H>>;

pub(crate) fn build<'g, 'h, N, W, H>(
    graph: &'g Graph<N, W>,
    options: &SearchOptions,
    heuristic: &'h H,
) -> GreedySearch<'g, 'h, N, W, H>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    H: Heuristic<N, W>,
{
    SearchAlgorithm::new(graph, HeuristicPriority { heuristic }, options)
}

/// Greedy best-first search.
///
/// Always expands whichever queued node looks closest to the goal.
/// This is often fast, but the path found need not be the cheapest.
pub fn greedy<N, W, H>(graph: &Graph<N, W>, origin: N, goal: N, heuristic: &H) -> Result<Expansion<N>>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    H: Heuristic<N, W>,
{
    Searcher::new(graph).greedy(origin, goal, heuristic)
}
