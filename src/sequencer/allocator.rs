/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Lock-free tag allocation.
//!
//! This module provides the allocator that hands each produced value its
//! unique, strictly increasing sequence tag.

use super::item::TaggedItem;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free allocator of monotonically increasing sequence tags.
///
/// Each call to [`next_item`] performs a single atomic increment: no two
/// calls ever receive the same tag, regardless of how many tasks or threads
/// call concurrently, and the call never blocks and never fails. Tag values
/// reflect the order in which the increments completed — not the order in
/// which the resulting items later arrive at the reordering engine.
///
/// Clones share the underlying counter, so an allocator can be handed to
/// any number of producers. Tags start at 1, matching the engine's initial
/// expected tag.
///
/// # Examples
///
/// ```
/// use resequencer_rs::TagAllocator;
///
/// let allocator = TagAllocator::new();
/// let first = allocator.next_item("a");
/// let second = allocator.next_item("b");
/// assert_eq!(first.tag, 1);
/// assert_eq!(second.tag, 2);
/// ```
///
/// [`next_item`]: TagAllocator::next_item
#[derive(Debug, Clone)]
pub struct TagAllocator {
    /// Next tag to hand out.
    next: Arc<AtomicU64>,
}

impl TagAllocator {
    /// Creates a new allocator whose first tag is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Wraps `value` with the next tag.
    ///
    /// Non-blocking and infallible; safe to call from any number of
    /// producers concurrently.
    pub fn next_item<T>(&self, value: T) -> TaggedItem<T> {
        let tag = self.next.fetch_add(1, Ordering::Relaxed);
        TaggedItem { value, tag }
    }

    /// Returns the most recently allocated tag, or 0 if none has been
    /// handed out yet.
    ///
    /// Racy by nature under concurrent allocation; intended for tests and
    /// diagnostics, not for coordination.
    #[must_use]
    pub fn last_tag(&self) -> u64 {
        self.next.load(Ordering::Relaxed).saturating_sub(1)
    }
}

impl Default for TagAllocator {
    fn default() -> Self {
        Self::new()
    }
}
