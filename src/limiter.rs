//! Bounded-concurrency task execution
//!
//! Runs a batch of workers with at most N futures pending at once. All
//! concurrency is cooperative on the calling task: pending fetches interleave
//! at their await points, nothing runs on other threads.
//!
//! Results arrive in completion order. Callers that need a stable order
//! (content resolution does, via sequence ids) must re-sort after collection.

use std::collections::VecDeque;
use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};

/// Run `worker` over `items` with at most `limit` in flight.
///
/// A `limit` of zero is treated as one. Every input is eventually processed
/// unless a worker fails: the first error aborts the batch, dropping in-flight
/// futures and never starting the still-queued items (fail-fast, no partial
/// success).
pub async fn run_bounded<T, R, E, F, Fut>(
    items: Vec<T>,
    limit: usize,
    worker: F,
) -> Result<Vec<R>, E>
where
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let limit = limit.max(1);
    let mut queue: VecDeque<T> = items.into();
    let mut in_flight = FuturesUnordered::new();
    let mut results = Vec::with_capacity(queue.len());

    loop {
        // Fill up to the concurrency limit before polling
        while in_flight.len() < limit {
            match queue.pop_front() {
                Some(item) => in_flight.push(worker(item)),
                None => break,
            }
        }

        match in_flight.next().await {
            Some(Ok(result)) => results.push(result),
            Some(Err(e)) => return Err(e),
            None => break,
        }
    }

    Ok(results)
}
