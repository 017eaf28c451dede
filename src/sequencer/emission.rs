/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Handoff payload and error types.
//!
//! This module defines the sum type sent on the handoff channel — either
//! the next in-order value or a terminal error — and the error itself.

use thiserror::Error;

/// Errors surfaced by a [`Resequencer`].
///
/// Exactly one kind exists: cancellation. There are no malformed-input
/// errors (tag uniqueness and ordering are guaranteed by the allocator) and
/// no I/O errors at this layer.
///
/// [`Resequencer`]: super::core::Resequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResequenceError {
    /// The cancellation token fired before the input stream completed.
    /// Buffered items were discarded and the stream is permanently closed.
    #[error("resequencer cancelled before the input stream completed")]
    Cancelled,
}

/// Payload delivered on the handoff channel.
///
/// Modeling the value/error distinction as an explicit variant (rather than
/// a sentinel value) lets the consumer tell a delivered item apart from a
/// cancellation without any race.
#[derive(Debug)]
pub enum Emission<T> {
    /// The next in-order value.
    Item(T),

    /// Terminal cancellation notice; no further emissions follow.
    Interrupted(ResequenceError),
}

impl<T> Emission<T> {
    /// Returns `true` if this emission carries a value.
    #[inline]
    #[must_use]
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }
}
