/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

//! Pull-based consumer facade.
//!
//! This module provides the [`OrderedScanner`] through which the single
//! consumer pulls restored-order values, mirroring a buffered reader's
//! scan/item/err contract.

use super::emission::{Emission, ResequenceError};
use tokio::sync::mpsc;

/// Pull-based iterator over the restored-order stream.
///
/// Exactly one consumer drives the scanner; taking `&mut self` in
/// [`scan`] enforces that discipline at compile time. The intended loop:
///
/// ```
/// use resequencer_rs::Resequencer;
/// use tokio::sync::mpsc;
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() {
/// # let (tx, rx) = mpsc::channel::<resequencer_rs::TaggedItem<u64>>(8);
/// # drop(tx);
/// let mut scanner = Resequencer::new(rx, CancellationToken::new()).spawn();
/// while scanner.scan().await {
///     println!("{}", scanner.item());
/// }
/// if let Some(err) = scanner.err() {
///     eprintln!("stream cancelled: {err}");
/// }
/// # }
/// ```
///
/// [`scan`]: OrderedScanner::scan
pub struct OrderedScanner<T> {
    /// Single-slot channel fed by the reordering engine.
    handoff_rx: mpsc::Receiver<Emission<T>>,

    /// Value made available by the most recent successful scan.
    current: Option<T>,

    /// Set once, if termination was due to cancellation.
    error: Option<ResequenceError>,

    /// Sticky end-of-stream flag.
    finished: bool,
}

impl<T> OrderedScanner<T> {
    /// Creates a scanner over an engine's handoff channel.
    pub(crate) fn new(handoff_rx: mpsc::Receiver<Emission<T>>) -> Self {
        Self {
            handoff_rx,
            current: None,
            error: None,
            finished: false,
        }
    }

    /// Waits for the next in-order value.
    ///
    /// Returns `true` when a value is available via [`item`], and `false`
    /// exactly when the stream has terminated — gracefully (input channel
    /// closed and buffer drained) or by cancellation. Once `false` has been
    /// returned, every subsequent call returns `false` without blocking.
    ///
    /// [`item`]: OrderedScanner::item
    pub async fn scan(&mut self) -> bool {
        if self.finished {
            return false;
        }
        match self.handoff_rx.recv().await {
            Some(Emission::Item(value)) => {
                self.current = Some(value);
                true
            }
            Some(Emission::Interrupted(err)) => {
                self.error = Some(err);
                self.finished = true;
                false
            }
            None => {
                self.finished = true;
                false
            }
        }
    }

    /// Returns the value made available by the most recent `true`-returning
    /// [`scan`].
    ///
    /// # Panics
    ///
    /// Panics if called before any successful [`scan`], or after the value
    /// was moved out with [`take_item`].
    ///
    /// [`scan`]: OrderedScanner::scan
    /// [`take_item`]: OrderedScanner::take_item
    #[must_use]
    pub fn item(&self) -> &T {
        self.current
            .as_ref()
            .expect("item() called before a successful scan()")
    }

    /// Moves the current value out of the scanner.
    ///
    /// Useful when `T` is not `Clone`. Returns `None` if no value is
    /// currently held; the next successful [`scan`] installs a new one.
    ///
    /// [`scan`]: OrderedScanner::scan
    #[must_use]
    pub fn take_item(&mut self) -> Option<T> {
        self.current.take()
    }

    /// Returns the cancellation error, if the stream terminated due to
    /// cancellation. `None` indicates a clean end of stream (or a stream
    /// that has not terminated yet). Once set, remains set.
    #[must_use]
    pub fn err(&self) -> Option<&ResequenceError> {
        self.error.as_ref()
    }
}
