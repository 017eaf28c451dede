/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Tagged item type.
//!
//! This module defines the wrapper pairing a produced value with the
//! monotonic tag that determines its position in the restored output order.

/// A value paired with its sequence tag.
///
/// The tag is assigned exactly once, by [`TagAllocator::next_item`], at the
/// moment the producer decides to emit the value, and is immutable
/// thereafter. Tags for a given [`Resequencer`] instance must all come from
/// the same allocator; feeding two items with the same tag is a precondition
/// violation with undefined reordering behavior.
///
/// Once sent on the input channel, the item is owned by the reordering
/// engine until it is emitted to the consumer.
///
/// # Examples
///
/// ```
/// use resequencer_rs::TaggedItem;
///
/// let item = TaggedItem::new("payload", 7);
/// assert_eq!(item.tag, 7);
/// assert_eq!(item.value, "payload");
/// ```
///
/// [`TagAllocator::next_item`]: super::allocator::TagAllocator::next_item
/// [`Resequencer`]: super::core::Resequencer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedItem<T> {
    /// The produced value.
    pub value: T,

    /// Position of this value in the restored output order.
    pub tag: u64,
}

impl<T> TaggedItem<T> {
    /// Creates a new tagged item.
    ///
    /// Prefer [`TagAllocator::next_item`] in production code; constructing
    /// items by hand is mainly useful for tests and replays of recorded
    /// streams.
    ///
    /// [`TagAllocator::next_item`]: super::allocator::TagAllocator::next_item
    #[must_use]
    pub fn new(value: T, tag: u64) -> Self {
        Self { value, tag }
    }
}
