/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! # resequencer-rs
//!
//! A streaming order-restoring sequencer: values produced by any number of
//! concurrent tasks are tagged with monotonic sequence numbers at production
//! time and re-emitted strictly in tag order through a pull-based scanner,
//! no matter how out of order (or how delayed) they arrive.
//!
//! Typical use: fan a file out to N workers that process chunks in
//! parallel, then reassemble the results in original chunk order on a
//! single consumer.
//!
//! # Quick start
//!
//! ```
//! use resequencer_rs::{Resequencer, TagAllocator};
//! use tokio::sync::mpsc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() {
//! let allocator = TagAllocator::new();
//! let (tx, rx) = mpsc::channel(256);
//! let cancel = CancellationToken::new();
//! let mut scanner = Resequencer::new(rx, cancel.clone()).spawn();
//!
//! for worker in 0..4 {
//!     let allocator = allocator.clone();
//!     let tx = tx.clone();
//!     tokio::spawn(async move {
//!         // Tag at the moment of production, send whenever ready.
//!         tx.send(allocator.next_item(worker)).await.ok();
//!     });
//! }
//! drop(tx);
//!
//! while scanner.scan().await {
//!     println!("in order: {}", scanner.item());
//! }
//! assert!(scanner.err().is_none());
//! # }
//! ```
//!
//! # Guarantees
//!
//! - Delivery in strictly increasing tag order, no gaps, no duplicates
//! - Lock-free tag allocation, safe from any number of producers
//! - Single-slot handoff: the engine never runs ahead of the consumer for
//!   emitted values
//! - Cancellation surfaces exactly once through [`OrderedScanner::err`]
//!
//! Items whose predecessors have not arrived are buffered without bound;
//! reordering an arbitrarily out-of-order stream requires unbounded memory
//! in the worst case.

pub mod sequencer;

pub use sequencer::{
    Emission, OrderedScanner, ResequenceError, Resequencer, TagAllocator, TagHeap, TaggedItem,
};
