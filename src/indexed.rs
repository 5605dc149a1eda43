//! Indexed Binary Min-Heap implementation
//!
//! A binary min-heap stored as a dense vector in level order, paired with a
//! *position index*: a map from each distinct value to the ordered set of
//! slots currently holding it. The index turns `contains` into a hash lookup
//! and lets `remove` find an occurrence without scanning the array.
//!
//! The index is derived state. Every array mutation goes through one of three
//! private primitives (append, swap, truncate) that update the array and the
//! index together, so the two never drift apart.
//!
//! # Time Complexity
//!
//! | Operation            | Complexity           |
//! |----------------------|----------------------|
//! | `push`               | O(log n)             |
//! | `pop`                | O(log n)             |
//! | `peek`               | O(1)                 |
//! | `contains`           | O(1) amortized       |
//! | `remove`             | O(log n) amortized   |
//! | `from_vec` (heapify) | O(n)                 |
//! | `from_collection`    | O(n log n)           |
//! | `clear`              | O(n)                 |
//!
//! Duplicates are tracked per value, not per insertion: `remove(&x)` takes
//! out *an* occurrence of `x`, with no promise about which one.
//!
//! # Example
//!
//! ```rust
//! use indexed_heap::indexed::IndexedMinHeap;
//!
//! let mut heap = IndexedMinHeap::new();
//! for x in [5, 3, 8, 1, 9, 2] {
//!     heap.push(x);
//! }
//!
//! assert!(heap.remove(&8));
//! assert!(!heap.contains(&8));
//! assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 9]);
//! ```

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::traits::{Heap, HeapError, Queue};

/// Slots holding one value, ascending. O(log m) updates for m copies.
type Slots = BTreeSet<usize>;

/// A binary min-heap with a value-to-slot index
///
/// Elements must be totally ordered (`Ord`) for the heap and hashable
/// (`Hash + Eq`, consistent with `Ord`) for the index. The index keeps its
/// own copy of each distinct value, hence `Clone`.
#[derive(Clone)]
pub struct IndexedMinHeap<T> {
    /// Complete binary tree in level order; children of `k` are `2k+1`, `2k+2`
    data: Vec<T>,
    /// For every distinct value, the slots in `data` that hold it
    positions: FxHashMap<T, Slots>,
}

impl<T: Ord + Hash + Clone> IndexedMinHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
        self.positions.reserve(additional);
    }

    /// Builds a heap from an arbitrary vector in O(n)
    ///
    /// The vector is taken over as the backing array and heapified bottom-up:
    /// every internal node, from the last one back to the root, is sifted
    /// down.
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut heap = Self {
            positions: FxHashMap::with_capacity_and_hasher(elements.len(), Default::default()),
            data: elements,
        };

        for (slot, value) in heap.data.iter().enumerate() {
            match heap.positions.get_mut(value) {
                Some(slots) => {
                    slots.insert(slot);
                }
                None => {
                    heap.positions.insert(value.clone(), BTreeSet::from([slot]));
                }
            }
        }

        for index in (0..heap.data.len() / 2).rev() {
            heap.sift_down(index);
        }

        heap.check_invariants();
        heap
    }

    /// Builds a heap by pushing each element in turn, O(n log n)
    ///
    /// Prefer [`from_vec`](Self::from_vec) when the elements are already in a
    /// vector.
    pub fn from_collection<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let elements = elements.into_iter();
        let mut heap = Self::with_capacity(elements.size_hint().0);
        for element in elements {
            heap.push(element);
        }
        heap
    }

    /// Returns true if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the minimum element, or `None` if the heap is empty
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Like [`peek`](Self::peek), but reports emptiness as [`HeapError::Empty`]
    pub fn try_peek(&self) -> Result<&T, HeapError> {
        self.peek().ok_or(HeapError::Empty)
    }

    /// Inserts an element, O(log n)
    pub fn push(&mut self, element: T) {
        let slot = self.place(element);
        self.sift_up(slot);
        self.check_invariants();
    }

    /// Inserts an element that may be absent
    ///
    /// # Errors
    /// Returns [`HeapError::MissingElement`] for `None`; the heap is left
    /// untouched.
    pub fn try_push(&mut self, element: Option<T>) -> Result<(), HeapError> {
        let element = element.ok_or(HeapError::MissingElement)?;
        self.push(element);
        Ok(())
    }

    /// Removes and returns the minimum element, O(log n)
    pub fn pop(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Like [`pop`](Self::pop), but reports emptiness as [`HeapError::Empty`]
    pub fn try_pop(&mut self) -> Result<T, HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }

    /// Returns true if an element equal to `element` is in the heap
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    /// Removes one occurrence of `element`, returning whether one was found
    ///
    /// The occurrence is located through the position index, so this is
    /// O(log n) rather than a scan. A missing value is not an error.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = match self.positions.get(element).and_then(|slots| slots.last()) {
            Some(&slot) => slot,
            None => return false,
        };
        self.remove_at(slot).is_some()
    }

    /// Removes every element, keeping the allocated storage
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Checks the heap-order property of the subtree rooted at `index`
    ///
    /// Call with `0` to check the whole heap. An out-of-range index is an
    /// empty subtree and therefore valid. Meant for tests and diagnostics.
    pub fn is_valid_heap(&self, index: usize) -> bool {
        let len = self.data.len();
        if index >= len {
            return true;
        }

        let left = 2 * index + 1;
        let right = 2 * index + 2;

        if left < len && self.data[left] < self.data[index] {
            return false;
        }
        if right < len && self.data[right] < self.data[index] {
            return false;
        }

        self.is_valid_heap(left) && self.is_valid_heap(right)
    }

    /// Checks that the position index exactly describes the array
    ///
    /// Every recorded slot must hold its value, slot sets must be non-empty,
    /// and the number of recorded slots must equal `len()`, which together
    /// mean every slot is recorded exactly once.
    pub fn is_index_consistent(&self) -> bool {
        let recorded: usize = self.positions.values().map(|slots| slots.len()).sum();
        if recorded != self.data.len() {
            return false;
        }

        self.positions.iter().all(|(value, slots)| {
            !slots.is_empty()
                && slots.iter().all(|&slot| self.data.get(slot) == Some(value))
        })
    }

    /// The backing array in level order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in arbitrary (level) order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing array in level order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(element) = self.pop() {
            sorted.push(element);
        }
        sorted
    }

    // Array + index primitives. Nothing else writes to `data`.

    /// Appends `element` in a new last slot and records it
    fn place(&mut self, element: T) -> usize {
        let slot = self.data.len();
        match self.positions.get_mut(&element) {
            Some(slots) => {
                slots.insert(slot);
            }
            None => {
                self.positions.insert(element.clone(), BTreeSet::from([slot]));
            }
        }
        self.data.push(element);
        slot
    }

    /// Swaps two slots, moving their index entries along
    fn swap_slots(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        // Equal values share one slot set that already names both slots
        if self.data[i] != self.data[j] {
            relocate(&mut self.positions, &self.data[i], i, j);
            relocate(&mut self.positions, &self.data[j], j, i);
        }
        self.data.swap(i, j);
    }

    /// Drops the last slot and its index entry
    fn truncate_last(&mut self) -> Option<T> {
        let removed = self.data.pop()?;
        let slot = self.data.len();

        let entry = self.positions.get_mut(&removed);
        debug_assert!(entry.is_some(), "removed value had no index entry");
        if let Some(slots) = entry {
            slots.remove(&slot);
            if slots.is_empty() {
                self.positions.remove(&removed);
            }
        }

        Some(removed)
    }

    /// Removes the element at `index`, repairing heap order around the gap
    fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        debug_assert!(index <= last, "remove_at({index}) out of bounds");

        self.swap_slots(index, last);
        let removed = self.truncate_last()?;

        // The element moved into `index` can violate order in one direction only
        if index != last && !self.sift_down(index) {
            self.sift_up(index);
        }

        self.check_invariants();
        Some(removed)
    }

    /// Move element at index up while it is smaller than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child is smaller
    ///
    /// Returns whether the element moved.
    fn sift_down(&mut self, mut index: usize) -> bool {
        let start = index;
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.data[right] < self.data[left] {
                right
            } else {
                left
            };

            if self.data[index] <= self.data[smallest] {
                break;
            }
            self.swap_slots(index, smallest);
            index = smallest;
        }
        index != start
    }

    #[inline]
    fn check_invariants(&self) {
        #[cfg(feature = "check-invariants")]
        {
            assert!(self.is_valid_heap(0), "heap order violated");
            assert!(
                self.is_index_consistent(),
                "position index out of sync with heap array"
            );
        }
    }
}

/// Moves one recorded slot of `value` from `from` to `to`
fn relocate<T: Hash + Eq>(positions: &mut FxHashMap<T, Slots>, value: &T, from: usize, to: usize) {
    let entry = positions.get_mut(value);
    debug_assert!(entry.is_some(), "value missing from index");
    if let Some(slots) = entry {
        let found = slots.remove(&from);
        debug_assert!(found, "slot {from} missing from index");
        slots.insert(to);
    }
}

impl<T: Ord + Hash + Clone> Default for IndexedMinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("data", &self.data)
            .field("distinct", &self.positions.len())
            .finish()
    }
}

impl<T: Ord + Hash + Clone> From<Vec<T>> for IndexedMinHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Ord + Hash + Clone, const N: usize> From<[T; N]> for IndexedMinHeap<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for IndexedMinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_collection(iter)
    }
}

impl<T: Ord + Hash + Clone> Extend<T> for IndexedMinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a IndexedMinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Ord + Hash + Clone> Heap<T> for IndexedMinHeap<T> {
    fn new() -> Self {
        IndexedMinHeap::new()
    }

    fn is_empty(&self) -> bool {
        IndexedMinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }

    fn push(&mut self, element: T) {
        IndexedMinHeap::push(self, element)
    }

    fn peek(&self) -> Option<&T> {
        IndexedMinHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        IndexedMinHeap::pop(self)
    }
}

impl<T: Ord + Hash + Clone> Queue<T> for IndexedMinHeap<T> {
    fn enqueue(&mut self, element: T) {
        self.push(element);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        IndexedMinHeap::peek(self)
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }
}
