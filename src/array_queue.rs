//! Array-backed FIFO queue
//!
//! A plain first-in, first-out queue over a growable ring buffer
//! ([`VecDeque`]). It has no ordering invariant beyond insertion order and
//! shares nothing with the heap except the [`Queue`] capability.
//!
//! Every operation is O(1) (amortized for `enqueue`).
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::ArrayQueue;
//!
//! let mut names = ArrayQueue::new();
//! names.enqueue("Charles");
//! names.enqueue("Erick");
//! assert_eq!(names.dequeue(), Some("Charles"));
//! assert_eq!(names.peek(), Some(&"Erick"));
//! ```

use std::collections::VecDeque;

use crate::traits::{HeapError, Queue};

/// A FIFO queue backed by a ring buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    items: VecDeque<T>,
}

impl<T> ArrayQueue<T> {
    /// Creates an empty queue
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates a queue holding a single element
    pub fn with_initial(value: T) -> Self {
        let mut queue = Self::new();
        queue.enqueue(value);
        queue
    }

    /// Adds an element at the back
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Removes and returns the front element, or `None` when empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Like [`dequeue`](Self::dequeue), but reports emptiness as
    /// [`HeapError::Empty`]
    pub fn try_dequeue(&mut self) -> Result<T, HeapError> {
        self.dequeue().ok_or(HeapError::Empty)
    }

    /// Returns the front element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Like [`peek`](Self::peek), but reports emptiness as [`HeapError::Empty`]
    pub fn try_peek(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates front to back
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, element: T) {
        ArrayQueue::enqueue(self, element)
    }

    fn dequeue(&mut self) -> Option<T> {
        ArrayQueue::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        ArrayQueue::peek(self)
    }

    fn len(&self) -> usize {
        ArrayQueue::len(self)
    }
}
