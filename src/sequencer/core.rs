/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Core reordering engine.
//!
//! This module provides the [`Resequencer`] that consumes tagged items from
//! an input channel in arbitrary arrival order and re-emits their values in
//! strict tag order through a single-slot handoff channel.

use super::emission::{Emission, ResequenceError};
use super::heap::TagHeap;
use super::item::TaggedItem;
use super::scanner::OrderedScanner;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// A streaming order-restoring sequencer.
///
/// Producers tag values with a shared [`TagAllocator`] and send the tagged
/// items on the input channel from any number of tasks, in any order.
/// [`spawn`] starts a single background task that buffers out-of-order
/// arrivals in a min-heap and delivers values in strictly increasing tag
/// order, with no gaps and no duplicates, to the returned
/// [`OrderedScanner`].
///
/// The instance terminates permanently once the input channel is closed and
/// the buffer is drained, or once the cancellation token fires — whichever
/// happens first. There is no restart; a terminated sequencer is discarded.
///
/// # Examples
///
/// ```
/// use resequencer_rs::{Resequencer, TagAllocator};
/// use tokio::sync::mpsc;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() {
/// let allocator = TagAllocator::new();
/// let (tx, rx) = mpsc::channel(64);
/// let mut scanner = Resequencer::new(rx, CancellationToken::new()).spawn();
///
/// tx.send(allocator.next_item("first")).await.ok();
/// drop(tx);
///
/// while scanner.scan().await {
///     println!("{}", scanner.item());
/// }
/// assert!(scanner.err().is_none());
/// # }
/// ```
///
/// [`TagAllocator`]: super::allocator::TagAllocator
/// [`spawn`]: Resequencer::spawn
pub struct Resequencer<T: Send + 'static> {
    /// Channel carrying tagged items from producers.
    input_rx: mpsc::Receiver<TaggedItem<T>>,

    /// External cancellation signal shared with the caller.
    cancel: CancellationToken,
}

impl<T: Send + 'static> Resequencer<T> {
    /// Creates a new sequencer bound to an input channel and a cancellation
    /// token.
    ///
    /// # Arguments
    ///
    /// * `input_rx` - Receiving half of the producers' channel
    /// * `cancel` - Token that aborts the stream when triggered
    #[must_use]
    pub fn new(input_rx: mpsc::Receiver<TaggedItem<T>>, cancel: CancellationToken) -> Self {
        Self { input_rx, cancel }
    }

    /// Spawns the reordering loop on a background task and returns the
    /// scanner through which the single consumer pulls in-order values.
    ///
    /// The handoff channel between the engine and the scanner has capacity
    /// 1: the engine cannot run ahead of the consumer for emitted items,
    /// though items whose predecessors have not arrived are buffered
    /// without bound.
    #[must_use]
    pub fn spawn(self) -> OrderedScanner<T> {
        let (handoff_tx, handoff_rx) = mpsc::channel(1);

        let engine = Engine {
            input_rx: self.input_rx,
            cancel: self.cancel,
            handoff_tx,
            buffer: TagHeap::new(),
            expected: 1,
        };
        tokio::spawn(engine.run_loop());

        OrderedScanner::new(handoff_rx)
    }
}

/// Reordering loop state, owned exclusively by the background task.
struct Engine<T> {
    input_rx: mpsc::Receiver<TaggedItem<T>>,
    cancel: CancellationToken,
    handoff_tx: mpsc::Sender<Emission<T>>,
    buffer: TagHeap<T>,
    /// Next tag required before anything further can be emitted.
    expected: u64,
}

impl<T: Send + 'static> Engine<T> {
    /// Runs the reordering loop until graceful EOF or cancellation.
    ///
    /// The two termination paths are mutually exclusive: each iteration
    /// selects either the cancellation signal or the next input event,
    /// never both. Cancellation is checked first, so it takes precedence
    /// when both are ready, but an in-flight blocking send to the handoff
    /// channel is not interrupted — a slow consumer can delay cancellation
    /// by up to one item.
    async fn run_loop(mut self) {
        loop {
            tokio::select! {
                biased;

                _ = self.cancel.cancelled() => {
                    debug!(
                        buffered = self.buffer.len(),
                        "cancellation observed, discarding buffered items"
                    );
                    let _ = self
                        .handoff_tx
                        .send(Emission::Interrupted(ResequenceError::Cancelled))
                        .await;
                    return;
                }

                received = self.input_rx.recv() => match received {
                    Some(item) => {
                        trace!(tag = item.tag, expected = self.expected, "item arrived");
                        self.buffer.push(item);
                        if !self.drain().await {
                            return;
                        }
                    }
                    None => {
                        debug!(buffered = self.buffer.len(), "input channel closed");
                        self.drain().await;
                        // Dropping handoff_tx closes the channel: the
                        // scanner observes a clean end of stream.
                        return;
                    }
                },
            }
        }
    }

    /// Emits buffered items while the smallest buffered tag is the expected
    /// one.
    ///
    /// Each send blocks until the consumer scans, which is the only
    /// backpressure in the pipeline. Returns `false` if the consumer
    /// dropped its scanner, in which case the loop stops.
    async fn drain(&mut self) -> bool {
        while self.buffer.peek_tag() == Some(self.expected) {
            let Some(item) = self.buffer.pop() else {
                break;
            };
            self.expected += 1;
            trace!(tag = item.tag, "emitting in-order item");
            if self
                .handoff_tx
                .send(Emission::Item(item.value))
                .await
                .is_err()
            {
                debug!("scanner dropped, stopping");
                return false;
            }
        }
        true
    }
}
