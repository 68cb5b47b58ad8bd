//! Bounded fan-out of independent API requests.
//!
//! Runs one request per key with at most `max_concurrent` in flight and hands
//! back every outcome, successful or not, in the order the keys were given.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::Result;

/// Query every key with bounded concurrency, collecting each outcome.
///
/// Unlike a page fetch, one failing key does not abort the others: the
/// caller receives `(key, Result)` pairs and decides how to aggregate them.
/// Output order matches input order regardless of completion order.
///
/// # Example
///
/// ```ignore
/// let outcomes = fan_out(
///     vec!["ivanova".to_string(), "IvanoVA".to_string()],
///     |login| async move { client.list_enrollments(&credential, &login).await },
///     2,
/// )
/// .await;
/// ```
pub async fn fan_out<K, T, F, Fut>(
    keys: Vec<K>,
    fetch: F,
    max_concurrent: usize,
) -> Vec<(K, Result<Vec<T>>)>
where
    K: Clone,
    F: Fn(K) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    if keys.is_empty() {
        return Vec::new();
    }

    let max_concurrent = max_concurrent.max(1);
    debug!(
        "Fanning out {} requests with max {} concurrent",
        keys.len(),
        max_concurrent
    );

    let make_future = |index: usize, key: K| {
        let fut = fetch(key.clone());
        async move { (index, key, fut.await) }
    };

    let mut pending = keys.into_iter().enumerate();
    let mut in_flight = FuturesUnordered::new();

    for (index, key) in pending.by_ref().take(max_concurrent) {
        in_flight.push(make_future(index, key));
    }

    let mut outcomes = Vec::new();
    while let Some((index, key, result)) = in_flight.next().await {
        debug!("Request {} finished (ok: {})", index, result.is_ok());
        outcomes.push((index, key, result));

        if let Some((next_index, next_key)) = pending.next() {
            in_flight.push(make_future(next_index, next_key));
        }
    }

    outcomes.sort_by_key(|(index, _, _)| *index);
    outcomes
        .into_iter()
        .map(|(_, key, result)| (key, result))
        .collect()
}
