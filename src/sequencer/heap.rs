/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Priority buffer for out-of-order items.
//!
//! This module provides a min-heap over [`TaggedItem`]s keyed solely by tag,
//! used by the reordering engine to hold items whose predecessors have not
//! arrived yet.

use super::item::TaggedItem;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry with reversed tag ordering, so the smallest tag surfaces
/// first on a max-heap.
#[derive(Debug)]
struct MinTag<T>(TaggedItem<T>);

impl<T> PartialEq for MinTag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.tag == other.0.tag
    }
}

impl<T> Eq for MinTag<T> {}

impl<T> PartialOrd for MinTag<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for MinTag<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.tag.cmp(&self.0.tag)
    }
}

/// Min-heap of [`TaggedItem`]s ordered by tag ascending.
///
/// [`push`] and [`pop`] are O(log n); [`peek_tag`] and [`len`] are O(1).
/// Comparison uses the tag alone. Tags are guaranteed unique by
/// [`TagAllocator`], so no deduplication is performed; inserting two items
/// with the same tag is a precondition violation and the relative order of
/// the duplicates is unspecified.
///
/// # Examples
///
/// ```
/// use resequencer_rs::{TagHeap, TaggedItem};
///
/// let mut heap = TagHeap::new();
/// heap.push(TaggedItem::new("late", 3));
/// heap.push(TaggedItem::new("early", 1));
/// assert_eq!(heap.peek_tag(), Some(1));
/// assert_eq!(heap.pop().map(|i| i.value), Some("early"));
/// ```
///
/// [`push`]: TagHeap::push
/// [`pop`]: TagHeap::pop
/// [`peek_tag`]: TagHeap::peek_tag
/// [`len`]: TagHeap::len
/// [`TagAllocator`]: super::allocator::TagAllocator
#[derive(Debug)]
pub struct TagHeap<T> {
    entries: BinaryHeap<MinTag<T>>,
}

impl<T> TagHeap<T> {
    /// Creates a new empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
        }
    }

    /// Creates a new heap with pre-allocated capacity.
    ///
    /// Use this when the expected out-of-order window is known in advance
    /// to avoid repeated reallocations.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Inserts an item, keyed by its tag.
    pub fn push(&mut self, item: TaggedItem<T>) {
        self.entries.push(MinTag(item));
    }

    /// Removes and returns the item with the smallest tag, or `None` if
    /// the heap is empty.
    pub fn pop(&mut self) -> Option<TaggedItem<T>> {
        self.entries.pop().map(|entry| entry.0)
    }

    /// Returns the smallest buffered tag without removing its item.
    #[must_use]
    pub fn peek_tag(&self) -> Option<u64> {
        self.entries.peek().map(|entry| entry.0.tag)
    }

    /// Returns the number of buffered items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no items are buffered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TagHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
