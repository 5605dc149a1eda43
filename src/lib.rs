//! Indexed Binary Min-Heap for Rust
//!
//! This crate provides a binary min-heap that, beside the usual push/pop/peek,
//! supports membership tests and removal of arbitrary values. An auxiliary
//! position index (value to array slots) keeps both off the linear-scan path.
//!
//! # Features
//!
//! - **IndexedMinHeap**: O(1) peek; O(log n) push, pop and remove-by-value;
//!   O(1) amortized contains; O(n) heapify from a vector
//! - **ArrayQueue**: a plain FIFO queue sharing the [`Queue`] capability with
//!   the heap
//!
//! Empty containers are reported with `Option`/[`HeapError::Empty`], never
//! with a default value.
//!
//! # Cargo features
//!
//! - `check-invariants`: re-verify heap order and the position index after
//!   every mutation (O(n) per operation, for test builds)
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);
//! assert_eq!(heap.peek(), Some(&1));
//! assert!(heap.contains(&8));
//! assert!(heap.remove(&8));
//! assert_eq!(heap.pop(), Some(1));
//! ```

pub mod array_queue;
pub mod indexed;
pub mod traits;

// Re-export the main types for convenience
pub use array_queue::ArrayQueue;
pub use indexed::IndexedMinHeap;
pub use traits::{Heap, HeapError, Queue};
