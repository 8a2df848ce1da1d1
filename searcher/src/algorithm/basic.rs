pub use bfs::bfs;
pub use dfs::dfs;

use crate::algorithm::{Candidate, Priority};
use crate::errors::Result;
use crate::traits::Weight;

/// Frontier policy for the uninformed searches, where order
/// comes entirely from the queue.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Unordered;

impl<N, W> Priority<N, W> for Unordered
where
    W: Weight,
{
    fn origin(&self, _node: &N) -> Result<W> {
        Ok(W::zero())
    }

    fn step(&self, _parent: &Candidate<N, W>, _node: &N, _edge: W) -> Result<(W, W)> {
        Ok((W::zero(), W::zero()))
    }
}

pub(crate) mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;
    use std::fmt::Debug;
    use std::hash::Hash;

    use super::Unordered;
    use crate::algorithm::{Candidate, SearchAlgorithm, SearchOptions, SearchQueue, Searcher};
    use crate::errors::Result;
    use crate::expansion::Expansion;
    use crate::graph::Graph;
    use crate::traits::Weight;

    #[derive(Debug)]
    pub(crate) struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    pub(crate) type BreadthFirstSearcher<'g, N, W> =
        SearchAlgorithm<'g, N, W, BreadthQueue<Candidate<N, W>>, Unordered>;

    pub(crate) fn build<'g, N, W>(
        graph: &'g Graph<N, W>,
        options: &SearchOptions,
    ) -> BreadthFirstSearcher<'g, N, W>
    where
        N: Debug + Clone + Hash + Eq,
        W: Weight,
    {
        SearchAlgorithm::new(graph, Unordered, options)
    }

    /// Breadth-first search, where neighbors are queued in
    /// the order they appear in the graph's adjacency lists.
    pub fn bfs<N, W>(graph: &Graph<N, W>, origin: N, goal: N) -> Result<Expansion<N>>
    where
        N: Debug + Clone + Hash + Eq,
        W: Weight,
    {
        Searcher::new(graph).bfs(origin, goal)
    }
}

pub(crate) mod dfs {
    use std::collections::VecDeque;
    use std::default::Default;
    use std::fmt::Debug;
    use std::hash::Hash;

    use super::Unordered;
    use crate::algorithm::{Candidate, SearchAlgorithm, SearchOptions, SearchQueue, Searcher};
    use crate::errors::Result;
    use crate::expansion::Expansion;
    use crate::graph::Graph;
    use crate::traits::Weight;

    #[derive(Debug)]
    pub(crate) struct DepthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> Default for DepthQueue<S> {
        fn default() -> Self {
            DepthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    impl<S> SearchQueue for DepthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_front(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    pub(crate) type DepthFirstSearcher<'g, N, W> =
        SearchAlgorithm<'g, N, W, DepthQueue<Candidate<N, W>>, Unordered>;

    pub(crate) fn build<'g, N, W>(
        graph: &'g Graph<N, W>,
        options: &SearchOptions,
    ) -> DepthFirstSearcher<'g, N, W>
    where
        N: Debug + Clone + Hash + Eq,
        W: Weight,
    {
        SearchAlgorithm::new(graph, Unordered, options)
    }

    /// Depth-first search. The last neighbor pushed is the
    /// first one explored.
    pub fn dfs<N, W>(graph: &Graph<N, W>, origin: N, goal: N) -> Result<Expansion<N>>
    where
        N: Debug + Clone + Hash + Eq,
        W: Weight,
    {
        Searcher::new(graph).dfs(origin, goal)
    }
}
