//! Provides the building blocks for search algorithms

use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use self::cache::Visited;
use crate::errors::{Result, SearchError};
use crate::expansion::Expansion;
use crate::graph::Graph;
use crate::traits::{Cost, Heuristic, Weight};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cache;
pub(crate) mod dijkstra;
pub(crate) mod greedy;
pub(crate) mod score;
pub(crate) mod strategy;

pub use strategy::Strategy;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
pub(crate) trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;
}

/// An entry in the search frontier.
///
/// Each candidate carries its own copy of the path which
/// reached it, so the same node may be queued several times
/// along different paths.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<N, W> {
    pub(crate) node: N,
    pub(crate) path: Vec<N>,
    pub(crate) cost: W,
    pub(crate) priority: W,
}

impl<N, W> Candidate<N, W>
where
    N: Clone,
    W: Weight,
{
    fn origin(node: N, priority: W) -> Self {
        Self {
            path: vec![node.clone()],
            node,
            cost: W::zero(),
            priority,
        }
    }

    fn step(&self, node: N, cost: W, priority: W) -> Self {
        let mut path = self.path.clone();
        path.push(node.clone());
        Self {
            node,
            path,
            cost,
            priority,
        }
    }
}

/// Decides the cost and frontier priority of each candidate.
pub(crate) trait Priority<N, W> {
    /// Priority of the starting candidate.
    fn origin(&self, node: &N) -> Result<W>;

    /// Cumulative cost and priority of stepping from `parent`
    /// to `node` along an edge of weight `edge`.
    fn step(&self, parent: &Candidate<N, W>, node: &N, edge: W) -> Result<(W, W)>;
}

/// Evaluate a step cost, rejecting negative values.
pub(crate) fn step_cost<N, W, C>(cost: &C, from: &N, to: &N, edge: W) -> Result<W>
where
    N: Debug,
    W: Weight,
    C: Cost<N, W>,
{
    let value = cost.cost(from, to, edge);
    if value < W::zero() {
        return Err(SearchError::NegativeCost {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        });
    }
    Ok(value)
}

/// Evaluate a heuristic, rejecting negative estimates.
pub(crate) fn estimate<N, W, H>(heuristic: &H, node: &N) -> Result<W>
where
    N: Debug,
    W: Weight,
    H: Heuristic<N, W>,
{
    let value = heuristic.estimate(node);
    if value < W::zero() {
        return Err(SearchError::NegativeHeuristic {
            node: format!("{:?}", node),
        });
    }
    Ok(value)
}

/// Add two costs, failing at `node` if the sum overflows `W`.
pub(crate) fn accumulate<N, W>(total: W, step: W, node: &N) -> Result<W>
where
    N: Debug,
    W: Weight,
{
    total
        .checked_add(&step)
        .ok_or_else(|| SearchError::CostOverflow {
            node: format!("{:?}", node),
        })
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.current))
        } else {
            Ok(())
        }
    }
}

/// Options which control how a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of candidates popped from the frontier
    /// before the search gives up with
    /// [SearchError::StepLimitExhausted].
    pub limit: Option<usize>,

    /// Log progress every this many candidates.
    pub verbose: Option<usize>,
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic priority policy (P) to
/// provide a single foundation for all of the search strategies.
/// Nodes are marked visited when popped, and the search stops as
/// soon as the goal is popped.
#[derive(Debug)]
pub(crate) struct SearchAlgorithm<'g, N, W, Q, P>
where
    N: Eq + Hash,
{
    graph: &'g Graph<N, W>,
    queue: Q,
    policy: P,
    visited: Visited<N>,
    counter: Option<StepLimit>,
    verbose: Option<usize>,
}

impl<'g, N, W, Q, P> SearchAlgorithm<'g, N, W, Q, P>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
    Q: SearchQueue<Candidate = Candidate<N, W>> + Default,
    P: Priority<N, W>,
{
    pub(crate) fn new(graph: &'g Graph<N, W>, policy: P, options: &SearchOptions) -> Self {
        SearchAlgorithm {
            graph,
            queue: Q::default(),
            policy,
            visited: Visited::default(),
            counter: options.limit.map(StepLimit::new),
            verbose: options.verbose.filter(|&v| v > 0),
        }
    }

    /// Run the search to completion.
    pub(crate) fn run(mut self, origin: N, goal: N) -> Result<Expansion<N>> {
        debug!("Searching from {:?} to {:?}", origin, goal);

        let priority = self.policy.origin(&origin)?;
        self.queue.push(Candidate::origin(origin, priority));

        let mut n = 0;
        while let Some(candidate) = self.queue.pop() {
            n += 1;

            // Increment the step counter
            self.counter
                .as_mut()
                .map(|c| c.increment())
                .unwrap_or(Ok(()))?;

            if let Some(interval) = self.verbose {
                if n % interval == 0 {
                    debug!(
                        "Q{} V{} P{:?} {}",
                        self.queue.len(),
                        self.visited.len(),
                        candidate.priority,
                        n
                    );
                }
            }

            // Duplicate entries for a node are dropped once
            // the first one has been expanded.
            if !self.visited.insert(&candidate.node) {
                continue;
            }

            if candidate.node == goal {
                debug!(
                    "Reached {:?} after {} expansions (cost {:?})",
                    goal,
                    self.visited.len(),
                    candidate.cost
                );
                return Ok(Expansion::found(self.visited.into_order(), candidate.path));
            }

            trace!("Expanding {:?} ({:?})", candidate.node, candidate.priority);
            for (neighbor, edge) in self.graph.neighbors(&candidate.node) {
                if self.visited.contains(neighbor) {
                    continue;
                }
                let (cost, priority) = self.policy.step(&candidate, neighbor, *edge)?;
                self.queue
                    .push(candidate.step(neighbor.clone(), cost, priority));
            }
        }

        debug!(
            "Frontier exhausted after {} expansions without reaching {:?}",
            self.visited.len(),
            goal
        );
        Ok(Expansion::exhausted(self.visited.into_order()))
    }
}

/// Runs searches over a borrowed graph.
///
/// The graph is only read, so any number of searchers
/// may share it, including across threads.
#[derive(Debug, Clone)]
pub struct Searcher<'g, N, W>
where
    N: Eq + Hash,
{
    graph: &'g Graph<N, W>,
    options: SearchOptions,
}

impl<'g, N, W> Searcher<'g, N, W>
where
    N: Debug + Clone + Hash + Eq,
    W: Weight,
{
    pub fn new(graph: &'g Graph<N, W>) -> Self {
        Self {
            graph,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for searches.
    ///
    /// When this many candidates have been popped,
    /// the next pop fails the search.
    pub fn limit(mut self, limit: usize) -> Self {
        self.options.limit = Some(limit);
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn dfs(&self, origin: N, goal: N) -> Result<Expansion<N>> {
        basic::dfs::build(self.graph, &self.options).run(origin, goal)
    }

    pub fn bfs(&self, origin: N, goal: N) -> Result<Expansion<N>> {
        basic::bfs::build(self.graph, &self.options).run(origin, goal)
    }

    pub fn ucs<C>(&self, origin: N, goal: N, cost: &C) -> Result<Expansion<N>>
    where
        C: Cost<N, W>,
    {
        dijkstra::build(self.graph, &self.options, cost).run(origin, goal)
    }

    pub fn greedy<H>(&self, origin: N, goal: N, heuristic: &H) -> Result<Expansion<N>>
    where
        H: Heuristic<N, W>,
    {
        greedy::build(self.graph, &self.options, heuristic).run(origin, goal)
    }

    pub fn astar<C, H>(&self, origin: N, goal: N, cost: &C, heuristic: &H) -> Result<Expansion<N>>
    where
        C: Cost<N, W>,
        H: Heuristic<N, W>,
    {
        astar::build(self.graph, &self.options, cost, heuristic).run(origin, goal)
    }

    /// Run the named strategy.
    ///
    /// Strategies which don't need the cost or the heuristic ignore them.
    pub fn search<C, H>(
        &self,
        strategy: Strategy,
        origin: N,
        goal: N,
        cost: &C,
        heuristic: &H,
    ) -> Result<Expansion<N>>
    where
        C: Cost<N, W>,
        H: Heuristic<N, W>,
    {
        match strategy {
            Strategy::DepthFirst => self.dfs(origin, goal),
            Strategy::BreadthFirst => self.bfs(origin, goal),
            Strategy::UniformCost => self.ucs(origin, goal, cost),
            Strategy::Greedy => self.greedy(origin, goal, heuristic),
            Strategy::AStar => self.astar(origin, goal, cost, heuristic),
        }
    }
}

/// Search `graph` with the given strategy, using default options.
pub fn search<N, W, C, H>(
    strategy: Strategy,
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
    Searcher::new(graph).search(strategy, origin, goal, cost, heuristic)
}
