//! Record of nodes which have already been expanded.

use std::collections::HashSet;
use std::hash::Hash;

/// Remembers expanded nodes, and the order they were expanded in.
#[derive(Debug)]
pub(crate) struct Visited<N>
where
    N: Eq + Hash,
{
    seen: HashSet<N>,
    order: Vec<N>,
}

impl<N> Default for Visited<N>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Visited {
            seen: HashSet::new(),
            order: Vec::new(),
        }
    }
}

impl<N> Visited<N>
where
    N: Clone + Eq + Hash,
{
    /// Mark `node` as visited.
    ///
    /// Returns false when the node had already been visited.
    pub(crate) fn insert(&mut self, node: &N) -> bool {
        if self.seen.contains(node) {
            return false;
        }
        self.seen.insert(node.clone());
        self.order.push(node.clone());
        true
    }

    pub(crate) fn contains(&self, node: &N) -> bool {
        self.seen.contains(node)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn into_order(self) -> Vec<N> {
        self.order
    }
}
