/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Streaming order-restoring sequencer.
//!
//! This module restores the original order of a stream processed by many
//! concurrent producers. Each value receives a globally unique, monotonic
//! tag at production time; a single background task buffers out-of-order
//! arrivals in a min-heap and re-emits values strictly in tag order through
//! a blocking, pull-based scanner.
//!
//! # Architecture
//!
//! - Producers tag values via a lock-free [`TagAllocator`] and send them on
//!   an input channel, from any number of tasks, in any order
//! - A single background task buffers arrivals in a [`TagHeap`] keyed by tag
//! - Values whose tag matches the next expected one are handed to the
//!   consumer over a single-slot channel, providing natural backpressure
//! - The consumer pulls values through [`OrderedScanner::scan`], bufio
//!   scanner style; cancellation is delivered through the same channel as a
//!   tagged [`Emission`] variant, so values and errors never race
//!
//! # Examples
//!
//! ```
//! use resequencer_rs::{Resequencer, TagAllocator};
//! use tokio::sync::mpsc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let allocator = TagAllocator::new();
//! let (tx, rx) = mpsc::channel(64);
//! let mut scanner = Resequencer::new(rx, CancellationToken::new()).spawn();
//!
//! // Producers may send from any number of tasks, in any order.
//! let first = allocator.next_item("one");
//! let second = allocator.next_item("two");
//! tx.send(second).await.ok();
//! tx.send(first).await.ok();
//! drop(tx);
//!
//! // The scanner yields "one" before "two" regardless of arrival order.
//! while scanner.scan().await {
//!     println!("{}", scanner.item());
//! }
//! # }
//! ```

pub mod allocator;
pub mod core;
pub mod emission;
pub mod heap;
pub mod item;
pub mod scanner;

#[cfg(test)]
mod tests;

// Re-export main types
pub use allocator::TagAllocator;
pub use core::Resequencer;
pub use emission::{Emission, ResequenceError};
pub use heap::TagHeap;
pub use item::TaggedItem;
pub use scanner::OrderedScanner;
