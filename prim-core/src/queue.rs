//! Indexed binary min-heap over vertex ids.
//!
//! Priorities are addressed by vertex rather than by heap slot, so a queued
//! vertex can have its key lowered in `O(log n)` without a linear search.
//! Keys only ever decrease while a vertex is queued.

use tracing::trace;

use crate::{
    error::QueueError,
    graph::{INFINITE_WEIGHT, Weight},
};

/// A binary min-heap keyed by vertex priority with decrease-key support.
///
/// # Examples
/// ```
/// use prim_core::VertexQueue;
///
/// let mut queue = VertexQueue::with_capacity(3).expect("capacity is positive");
/// queue.insert(0, 9).expect("vertex fits");
/// queue.insert(1, 4).expect("vertex fits");
/// queue.insert(2, 6).expect("vertex fits");
/// queue.decrease_key(0, 1).expect("key decreases");
/// assert_eq!(queue.extract_min(), Ok(0));
/// assert_eq!(queue.extract_min(), Ok(1));
/// assert!(queue.contains(2));
/// ```
#[derive(Clone, Debug)]
pub struct VertexQueue {
    heap: Vec<usize>,
    positions: Vec<Option<usize>>,
    keys: Vec<Weight>,
}

impl VertexQueue {
    /// Creates an empty queue able to hold vertex ids `0..capacity`.
    ///
    /// # Errors
    /// Returns [`QueueError::ZeroCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError> {
        if capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        Ok(Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            keys: vec![INFINITE_WEIGHT; capacity],
        })
    }

    /// Returns the number of vertex ids the queue can address.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of queued vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when no vertex is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` when `vertex` is queued. Out-of-range ids are never queued.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.positions.get(vertex), Some(Some(_)))
    }

    /// Returns the current key of a queued vertex.
    #[must_use]
    pub fn key(&self, vertex: usize) -> Option<Weight> {
        if self.contains(vertex) {
            self.keys.get(vertex).copied()
        } else {
            None
        }
    }

    /// Queues `vertex` with priority `key`.
    ///
    /// # Errors
    /// Returns [`QueueError::VertexOutOfRange`] for ids beyond the capacity,
    /// [`QueueError::Full`] when every slot is taken and
    /// [`QueueError::AlreadyQueued`] when `vertex` is already present.
    pub fn insert(&mut self, vertex: usize, key: Weight) -> Result<(), QueueError> {
        self.check_vertex(vertex)?;
        if self.heap.len() >= self.capacity() {
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }
        if self.contains(vertex) {
            return Err(QueueError::AlreadyQueued { vertex });
        }

        let slot = self.heap.len();
        self.set_key(vertex, key);
        self.heap.push(vertex);
        self.set_position(vertex, Some(slot));
        self.sift_up(slot);
        trace!(vertex, key, "queued vertex");
        Ok(())
    }

    /// Removes and returns the vertex with the smallest key.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] when nothing is queued.
    pub fn extract_min(&mut self) -> Result<usize, QueueError> {
        let Some(&min_vertex) = self.heap.first() else {
            return Err(QueueError::Empty);
        };

        let last = self.heap.len() - 1;
        self.swap_slots(0, last);
        self.heap.pop();
        self.set_position(min_vertex, None);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        trace!(vertex = min_vertex, key = self.key_of(min_vertex), "extracted vertex");
        Ok(min_vertex)
    }

    /// Lowers the key of a queued vertex and restores heap order.
    ///
    /// Passing the current key again is accepted and leaves the order intact.
    ///
    /// # Errors
    /// Returns [`QueueError::VertexOutOfRange`] for ids beyond the capacity,
    /// [`QueueError::NotQueued`] when `vertex` is absent and
    /// [`QueueError::KeyIncrease`] when `new_key` exceeds the current key.
    pub fn decrease_key(&mut self, vertex: usize, new_key: Weight) -> Result<(), QueueError> {
        self.check_vertex(vertex)?;
        let Some(slot) = self.positions.get(vertex).copied().flatten() else {
            return Err(QueueError::NotQueued { vertex });
        };
        let current = self.key_of(vertex);
        if new_key > current {
            return Err(QueueError::KeyIncrease {
                vertex,
                current,
                requested: new_key,
            });
        }

        self.set_key(vertex, new_key);
        self.sift_up(slot);
        trace!(vertex, from = current, to = new_key, "decreased key");
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), QueueError> {
        if vertex < self.capacity() {
            Ok(())
        } else {
            Err(QueueError::VertexOutOfRange {
                vertex,
                capacity: self.capacity(),
            })
        }
    }

    fn key_of(&self, vertex: usize) -> Weight {
        self.keys.get(vertex).copied().unwrap_or(INFINITE_WEIGHT)
    }

    fn key_at(&self, slot: usize) -> Weight {
        self.heap
            .get(slot)
            .map_or(INFINITE_WEIGHT, |&vertex| self.key_of(vertex))
    }

    fn set_key(&mut self, vertex: usize, key: Weight) {
        if let Some(stored) = self.keys.get_mut(vertex) {
            *stored = key;
        }
    }

    fn set_position(&mut self, vertex: usize, slot: Option<usize>) {
        if let Some(position) = self.positions.get_mut(vertex) {
            *position = slot;
        }
    }

    fn swap_slots(&mut self, left: usize, right: usize) {
        self.heap.swap(left, right);
        if let Some(&vertex) = self.heap.get(left) {
            self.set_position(vertex, Some(left));
        }
        if let Some(&vertex) = self.heap.get(right) {
            self.set_position(vertex, Some(right));
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) >> 1;
            if self.key_at(slot) >= self.key_at(parent) {
                break;
            }
            self.swap_slots(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.key_at(left) < self.key_at(smallest) {
                smallest = left;
            }
            if right < len && self.key_at(right) < self.key_at(smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap_slots(slot, smallest);
            slot = smallest;
        }
    }
}
