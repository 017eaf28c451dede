/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/3/26
******************************************************************************/

use resequencer_rs::{ResequenceError, Resequencer, TagAllocator, TaggedItem};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests {
    use super::*;

    async fn scan_all<T: Send + 'static>(
        mut scanner: resequencer_rs::OrderedScanner<T>,
    ) -> (Vec<T>, Option<ResequenceError>) {
        let mut out = Vec::new();
        while scanner.scan().await {
            out.push(scanner.take_item().unwrap());
        }
        (out, scanner.err().copied())
    }

    // --- end-to-end reassembly ---

    #[tokio::test]
    async fn test_reassembles_scrambled_stream() {
        let (tx, rx) = mpsc::channel(8);
        let scanner = Resequencer::new(rx, CancellationToken::new()).spawn();

        for (value, tag) in [("b", 2), ("a", 1), ("e", 5), ("c", 3), ("d", 4)] {
            tx.send(TaggedItem::new(value, tag)).await.ok();
        }
        drop(tx);

        let (out, err) = scan_all(scanner).await;
        assert_eq!(out, vec!["a", "b", "c", "d", "e"]);
        assert!(err.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_workers_original_order() {
        // Simulates chunked file processing: chunks are tagged in original
        // order, handed to workers, finished at arbitrary times, and must
        // come back out in original order.
        let allocator = TagAllocator::new();
        let (tx, rx) = mpsc::channel(16);
        let scanner = Resequencer::new(rx, CancellationToken::new()).spawn();

        let chunks: Vec<TaggedItem<u64>> =
            (0..100).map(|c| allocator.next_item(c)).collect();

        let mut workers = Vec::new();
        for (i, item) in chunks.into_iter().enumerate() {
            let tx = tx.clone();
            workers.push(tokio::spawn(async move {
                // Stagger completion so later chunks often finish first.
                let delay = (100 - i as u64) % 7;
                tokio::time::sleep(tokio::time::Duration::from_millis(delay)).await;
                tx.send(item).await.ok();
            }));
        }
        drop(tx);

        let (out, err) = scan_all(scanner).await;
        assert_eq!(out, (0..100).collect::<Vec<u64>>());
        assert!(err.is_none());

        for worker in workers {
            worker.await.ok();
        }
    }

    // --- termination ---

    #[tokio::test]
    async fn test_cancellation_reported_through_err() {
        let (tx, rx) = mpsc::channel(4);
        let cancel = CancellationToken::new();
        let scanner = Resequencer::new(rx, cancel.clone()).spawn();

        // A gap at tag 1 keeps everything buffered until cancellation.
        tx.send(TaggedItem::new("stuck", 2)).await.ok();
        cancel.cancel();

        let (out, err) = scan_all(scanner).await;
        assert!(out.is_empty());
        assert_eq!(err, Some(ResequenceError::Cancelled));
        drop(tx);
    }

    #[tokio::test]
    async fn test_timeout_wrapped_cancellation() {
        // Callers wanting a deadline wrap the token themselves.
        let (tx, rx) = mpsc::channel::<TaggedItem<u64>>(4);
        let cancel = CancellationToken::new();
        let mut scanner = Resequencer::new(rx, cancel.clone()).spawn();

        let deadline = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
            deadline.cancel();
        });

        assert!(!scanner.scan().await);
        assert_eq!(scanner.err(), Some(&ResequenceError::Cancelled));
        drop(tx);
    }
}
