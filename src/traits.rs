//! Common traits for the containers in this crate
//!
//! This module provides the two capabilities the containers share:
//!
//! - [`Heap`]: Base trait for min-heaps over totally ordered elements
//! - [`Queue`]: The "sequence container" capability (enqueue at the back,
//!   dequeue from the front), implemented by both the FIFO
//!   [`ArrayQueue`](crate::array_queue::ArrayQueue) and the priority-ordered
//!   [`IndexedMinHeap`](crate::indexed::IndexedMinHeap)
//!
//! Both traits report "no element available" through `Option`, never through a
//! default value, so a queued `0` or `""` is never mistaken for emptiness.

use std::fmt;

/// Error type for container operations
///
/// `Empty` and `MissingElement` are deliberately distinct: the first is an
/// expected state the caller can check for, the second is bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The container holds no elements (peek/pop/dequeue on an empty container)
    Empty,
    /// No element was supplied to an insertion
    MissingElement,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "container is empty"),
            HeapError::MissingElement => {
                write!(f, "cannot insert an absent element")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for min-heap data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`, except
/// that the smallest element is at the front:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// # Example
///
/// ```rust
/// use indexed_heap::Heap;
/// use indexed_heap::indexed::IndexedMinHeap;
///
/// let mut heap: IndexedMinHeap<i32> = Heap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, element: T);

    /// Returns the minimum element without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<T>;
}

/// Sequence container capability: elements go in at the back and come out
/// of the front
///
/// What "front" means is up to the container. For
/// [`ArrayQueue`](crate::array_queue::ArrayQueue) it is insertion order, for
/// [`IndexedMinHeap`](crate::indexed::IndexedMinHeap) it is the minimum.
///
/// # Example
///
/// ```rust
/// use indexed_heap::{ArrayQueue, IndexedMinHeap, Queue};
///
/// fn drain<Q: Queue<i32>>(mut q: Q) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Some(x) = q.dequeue() {
///         out.push(x);
///     }
///     out
/// }
///
/// let fifo: ArrayQueue<i32> = [3, 1, 2].into_iter().collect();
/// let prio: IndexedMinHeap<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(drain(fifo), vec![3, 1, 2]);
/// assert_eq!(drain(prio), vec![1, 2, 3]);
/// ```
pub trait Queue<T> {
    /// Adds an element at the back
    fn enqueue(&mut self, element: T);

    /// Removes and returns the front element, or `None` when empty
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the front element without removing it
    fn peek(&self) -> Option<&T>;

    /// Returns the number of queued elements
    fn len(&self) -> usize;

    /// Returns true if nothing is queued
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
