use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use num::{CheckedAdd, One, Zero};

/// Numeric type usable as an edge weight, path cost or
/// heuristic estimate.
///
/// Weights must be totally ordered so that frontier
/// priorities are well defined, and sums are checked so that
/// narrow types report overflow instead of wrapping. Any
/// primitive integer type qualifies.
pub trait Weight: Copy + Debug + Ord + Zero + One + CheckedAdd {}

impl<T> Weight for T where T: Copy + Debug + Ord + Zero + One + CheckedAdd {}

/// The cost of stepping from one node to an adjacent node.
///
/// Costs are expected to be pure and non-negative. A search
/// which observes a negative cost fails with
/// [SearchError::NegativeCost](crate::SearchError::NegativeCost).
pub trait Cost<N, W> {
    /// Cost of the step `from` -> `to` along an edge of weight `edge`.
    fn cost(&self, from: &N, to: &N, edge: W) -> W;
}

/// Uses the weight stored on the graph edge as the step cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeWeight;

impl<N, W> Cost<N, W> for EdgeWeight {
    fn cost(&self, _from: &N, _to: &N, edge: W) -> W {
        edge
    }
}

/// Every step costs one, regardless of the graph weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl<N, W> Cost<N, W> for Uniform
where
    W: One,
{
    fn cost(&self, _from: &N, _to: &N, _edge: W) -> W {
        W::one()
    }
}

impl<N, W, F> Cost<N, W> for F
where
    F: Fn(&N, &N) -> W,
{
    fn cost(&self, from: &N, to: &N, _edge: W) -> W {
        self(from, to)
    }
}

/// An estimate of the remaining cost from a node to the goal.
///
/// A* only returns optimal paths when the heuristic is
/// admissible (never overestimates). That is assumed, not checked.
pub trait Heuristic<N, W> {
    fn estimate(&self, node: &N) -> W;
}

/// The zero heuristic. A* degrades to uniform cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHeuristic;

impl<N, W> Heuristic<N, W> for NoHeuristic
where
    W: Zero,
{
    fn estimate(&self, _node: &N) -> W {
        W::zero()
    }
}

/// A table of estimates. Nodes missing from the table estimate zero.
impl<N, W, S> Heuristic<N, W> for HashMap<N, W, S>
where
    N: Eq + Hash,
    W: Copy + Zero,
    S: BuildHasher,
{
    fn estimate(&self, node: &N) -> W {
        self.get(node).copied().unwrap_or_else(W::zero)
    }
}

impl<N, W, F> Heuristic<N, W> for F
where
    F: Fn(&N) -> W,
{
    fn estimate(&self, node: &N) -> W {
        self(node)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn step<C: Cost<&'static str, i32>>(cost: &C) -> i32 {
        cost.cost(&"A", &"B", 7)
    }

    fn guess<H: Heuristic<&'static str, i32>>(heuristic: &H) -> i32 {
        heuristic.estimate(&"A")
    }

    #[test]
    fn costs() {
        assert_eq!(step(&EdgeWeight), 7);
        assert_eq!(step(&Uniform), 1);
        assert_eq!(step(&|_: &&str, _: &&str| 3), 3);
    }

    #[test]
    fn heuristics() {
        assert_eq!(guess(&NoHeuristic), 0);
        assert_eq!(guess(&|n: &&str| n.len() as i32), 1);

        let mut table = HashMap::new();
        table.insert("B", 4);
        assert_eq!(guess(&table), 0);
        table.insert("A", 2);
        assert_eq!(guess(&table), 2);
    }
}
