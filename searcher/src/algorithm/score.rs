//! A min-heap frontier shared by the informed searches.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;

use super::{Candidate, SearchQueue};
use crate::traits::Weight;

/// Wraps a candidate so that the lowest priority sorts highest
/// in a [BinaryHeap]. Equal priorities are ordered by when
/// the candidate was queued, oldest first.
#[derive(Debug)]
struct Score<N, W> {
    sequence: usize,
    candidate: Candidate<N, W>,
}

impl<N, W> Score<N, W>
where
    W: Weight,
{
    fn key(&self) -> (W, usize) {
        (self.candidate.priority, self.sequence)
    }
}

impl<N, W> PartialEq for Score<N, W>
where
    W: Weight,
{
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl<N, W> Eq for Score<N, W> where W: Weight {}

impl<N, W> Ord for Score<N, W>
where
    W: Weight,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl<N, W> PartialOrd for Score<N, W>
where
    W: Weight,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always pops the candidate with the
/// lowest priority, breaking ties in insertion order.
#[derive(Debug)]
pub(crate) struct PriorityQueue<N, W>
where
    W: Weight,
{
    queue: BinaryHeap<Score<N, W>>,
    sequence: usize,
}

impl<N, W> Default for PriorityQueue<N, W>
where
    W: Weight,
{
    fn default() -> Self {
        PriorityQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<N, W> SearchQueue for PriorityQueue<N, W>
where
    W: Weight,
{
    type Candidate = Candidate<N, W>;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|s| s.candidate)
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push(Score {
            sequence: self.sequence,
            candidate: item,
        });
        self.sequence += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
