//! Bounded k-nearest selection.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A training sample's squared distance to the current query.
///
/// Neighbors are totally ordered by `(distance, index)`: equal distances
/// resolve to the lower training index, so every selection built on this
/// ordering is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor {
    /// Squared Euclidean distance to the query
    pub distance: f64,
    /// Row of the training sample
    pub index: usize,
}

impl Neighbor {
    /// Creates a neighbor record.
    #[must_use]
    pub fn new(distance: f64, index: usize) -> Self {
        Self { distance, index }
    }
}

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.index.cmp(&other.index))
    }
}

/// Squared Euclidean distance `sum((a_i - b_i)^2)`.
///
/// No square root is taken; the ranking is the same.
#[must_use]
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// The k nearest neighbors seen so far for one query.
///
/// A max-heap keyed on [`Neighbor`] ordering, so the farthest retained
/// neighbor sits on top. Once full, a candidate replaces the top only if it
/// orders strictly below it. After every training sample has been offered
/// the set holds exactly the k smallest neighbors under `(distance, index)`,
/// independent of offer order.
///
/// # Example
///
/// ```
/// use plurality::classification::{Neighbor, NeighborSet};
///
/// let mut set = NeighborSet::new(2);
/// for (index, distance) in [4.0, 1.0, 9.0, 0.5].into_iter().enumerate() {
///     set.offer(Neighbor::new(distance, index));
/// }
/// let nearest: Vec<usize> = set.into_sorted_vec().iter().map(|n| n.index).collect();
/// assert_eq!(nearest, vec![3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct NeighborSet {
    capacity: usize,
    heap: BinaryHeap<Neighbor>,
}

impl NeighborSet {
    /// Creates an empty set that keeps at most `capacity` neighbors.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Offers a candidate; returns whether it was retained.
    pub fn offer(&mut self, candidate: Neighbor) -> bool {
        if self.heap.len() < self.capacity {
            self.heap.push(candidate);
            return true;
        }
        match self.heap.peek_mut() {
            Some(mut farthest) if candidate < *farthest => {
                *farthest = candidate;
                true
            }
            _ => false,
        }
    }

    /// Maximum number of neighbors retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of neighbors currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing has been retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true once `capacity` neighbors are retained.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// The farthest retained neighbor.
    #[must_use]
    pub fn farthest(&self) -> Option<Neighbor> {
        self.heap.peek().copied()
    }

    /// Consumes the set, returning neighbors nearest first.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<Neighbor> {
        self.heap.into_sorted_vec()
    }
}
