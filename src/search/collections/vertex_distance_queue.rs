use std::{cmp::Reverse, collections::BinaryHeap};

use clap::ValueEnum;
use radix_heap::RadixHeapMap;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, VertexId};

/// A trait for a priority queue that manages vertices and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the vertex with the smallest distance (such as Dijkstra's algorithm).
///
/// The implementing structs do not use a decrease key operation, a vertex may
/// be inserted several times and stale entries are popped later.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: VertexId, distance: Distance);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty. Ties are broken
    /// arbitrarily.
    fn pop(&mut self) -> Option<(VertexId, Distance)>;

    fn is_empty(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    #[default]
    BinaryHeap,
    Radix,
}

impl QueueKind {
    pub fn new_queue(&self) -> Box<dyn VertexDistanceQueue> {
        match self {
            QueueKind::BinaryHeap => Box::new(VertexDistanceQueueBinaryHeap::new()),
            QueueKind::Radix => Box::new(VertexDistanceQueueRadixHeap::new()),
        }
    }
}

/// A priority queue implementation using a Binary Heap.
#[derive(Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, VertexId)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: VertexId, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        let Reverse((distance, vertex)) = self.heap.pop()?;

        Some((vertex, distance))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// A monotone priority queue. Inserted distances must never be smaller than
/// the last popped distance, which holds for Dijkstra's algorithm on
/// nonnegative weights.
pub struct VertexDistanceQueueRadixHeap {
    // max heap, keys are negated distances
    heap: RadixHeapMap<i64, VertexId>,
}

impl Default for VertexDistanceQueueRadixHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexDistanceQueueRadixHeap {
    pub fn new() -> Self {
        VertexDistanceQueueRadixHeap {
            heap: RadixHeapMap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueRadixHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: VertexId, distance: Distance) {
        self.heap.push(-(distance as i64), vertex);
    }

    fn pop(&mut self) -> Option<(VertexId, Distance)> {
        let (negative_distance, vertex) = self.heap.pop()?;

        Some((vertex, -negative_distance as Distance))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pops_in_order(mut queue: Box<dyn VertexDistanceQueue>) {
        queue.insert(7, 4);
        queue.insert(3, 1);
        queue.insert(5, 9);

        assert_eq!(queue.pop(), Some((3, 1)));
        queue.insert(8, 2);
        assert_eq!(queue.pop(), Some((8, 2)));
        assert_eq!(queue.pop(), Some((7, 4)));
        assert_eq!(queue.pop(), Some((5, 9)));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn binary_heap_pops_smallest_distance() {
        pops_in_order(QueueKind::BinaryHeap.new_queue());
    }

    #[test]
    fn radix_heap_pops_smallest_distance() {
        pops_in_order(QueueKind::Radix.new_queue());
    }
}
