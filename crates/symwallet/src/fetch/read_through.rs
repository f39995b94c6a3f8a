//! Read-through fetcher.
//!
//! Every fetch is a two-stage producer: the cached list is pushed first,
//! then the spawned remote query is awaited and its result pushed second.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::task::AbortHandle;
use tokio_stream::Stream;

use symwallet_core::cache::EntityCacheStore;
use symwallet_core::repository::RemoteQueryError;

use super::FetchError;

/// Stream of entity lists produced by [`ReadThrough::fetch`].
///
/// Yields at most two lists: the cached one (only on a hit) and the fresh one.
/// An `Err` item ends the stream.
pub type EntityStream<E> = Pin<Box<dyn Stream<Item = Result<Vec<E>, FetchError>> + Send>>;

/// Aborts the spawned remote query when the stream is dropped.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Read-through fetcher over an entity cache store.
///
/// # Type Parameters
///
/// * `S` - The cache store holding one entity list per partition key
pub struct ReadThrough<S> {
    store: Arc<S>,
}

impl<S> Clone for ReadThrough<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ReadThrough<S> {
    /// Creates a new fetcher over `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches the entity list for `partition_key`.
    ///
    /// Nothing happens until the stream is first polled. Then:
    ///
    /// 1. Without a partition key the stream yields `[]` and completes; `query`
    ///    is dropped without being polled.
    /// 2. `query` is spawned before the cache is read, so both run concurrently.
    /// 3. A cached list is yielded first. A failing cache read counts as a miss.
    /// 4. On success the fresh list replaces the cached one with a single `set`
    ///    and is yielded. If that write fails the fresh list is still yielded,
    ///    followed by [`FetchError::Storage`].
    /// 5. On failure [`FetchError::Remote`] is yielded and the cache is left
    ///    untouched.
    ///
    /// Dropping the stream aborts the query; no later value is delivered and
    /// nothing is written.
    ///
    /// # Arguments
    ///
    /// * `partition_key` - Cache scope, `None` when there is nothing to fetch
    /// * `query` - Remote query producing entities in server order
    pub fn fetch<E, Q>(&self, partition_key: Option<String>, query: Q) -> EntityStream<E>
    where
        S: EntityCacheStore<E> + 'static,
        E: Send + Sync + 'static,
        Q: Future<Output = Result<Vec<E>, RemoteQueryError>> + Send + 'static,
    {
        let store = Arc::clone(&self.store);

        Box::pin(async_stream::stream! {
            let Some(partition_key) = partition_key else {
                tracing::debug!("No partition key, skipping remote query");
                yield Ok(Vec::new());
                return;
            };

            let task = tokio::spawn(query);
            let _abort = AbortOnDrop(task.abort_handle());

            match store.get(&partition_key).await {
                Ok(Some(cached)) => {
                    tracing::trace!(partition = %partition_key, count = cached.len(), "Cache hit");
                    yield Ok(cached);
                }
                Ok(None) => {
                    tracing::trace!(partition = %partition_key, "Cache miss");
                }
                Err(err) => {
                    tracing::warn!(
                        partition = %partition_key,
                        error = %err,
                        "Cache read failed, treating as miss"
                    );
                }
            }

            match task.await {
                Ok(Ok(fresh)) => {
                    let written = store.set(&partition_key, &fresh).await;
                    tracing::debug!(partition = %partition_key, count = fresh.len(), "Fetched fresh entities");
                    yield Ok(fresh);

                    if let Err(err) = written {
                        tracing::warn!(partition = %partition_key, error = %err, "Failed to cache entities");
                        yield Err(FetchError::Storage(err));
                    }
                }
                Ok(Err(err)) => {
                    tracing::warn!(partition = %partition_key, error = %err, "Remote query failed");
                    yield Err(FetchError::Remote(err));
                }
                Err(join_err) => {
                    tracing::error!(partition = %partition_key, error = %join_err, "Remote query task did not finish");
                    yield Err(FetchError::Remote(RemoteQueryError::Aborted(join_err.to_string())));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::{oneshot, RwLock};
    use tokio_stream::StreamExt;

    use symwallet_core::cache::{CacheError, Result as CacheResult};

    /// Mock store with call counters and switchable failures.
    #[derive(Default)]
    struct MockStore {
        lists: RwLock<HashMap<String, Vec<String>>>,
        get_calls: AtomicUsize,
        set_calls: AtomicUsize,
        fail_get: bool,
        fail_set: bool,
    }

    impl MockStore {
        async fn with_list(self, key: &str, list: &[&str]) -> Self {
            self.lists.write().await.insert(key.to_string(), strings(list));
            self
        }

        async fn list(&self, key: &str) -> Option<Vec<String>> {
            self.lists.read().await.get(key).cloned()
        }
    }

    #[async_trait]
    impl EntityCacheStore<String> for MockStore {
        async fn get(&self, partition_key: &str) -> CacheResult<Option<Vec<String>>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_get {
                return Err(CacheError::ConnectionFailed("store offline".to_string()));
            }
            Ok(self.lists.read().await.get(partition_key).cloned())
        }

        async fn set(&self, partition_key: &str, entities: &[String]) -> CacheResult<()> {
            self.set_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_set {
                return Err(CacheError::OperationFailed("disk full".to_string()));
            }
            self.lists
                .write()
                .await
                .insert(partition_key.to_string(), entities.to_vec());
            Ok(())
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn key(k: &str) -> Option<String> {
        Some(k.to_string())
    }

    /// Remote query that counts how often it starts.
    fn counted_query(
        calls: &Arc<AtomicUsize>,
        result: std::result::Result<Vec<String>, RemoteQueryError>,
    ) -> impl Future<Output = std::result::Result<Vec<String>, RemoteQueryError>> + Send + 'static
    {
        let calls = Arc::clone(calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        }
    }

    async fn collect(stream: EntityStream<String>) -> Vec<std::result::Result<Vec<String>, FetchError>> {
        stream.collect().await
    }

    #[tokio::test]
    async fn test_cached_list_is_emitted_before_fresh_list() {
        // partition "netA" holds [m1]; the node returns [m1, m2]
        let store = Arc::new(MockStore::default().with_list("netA", &["m1"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["m1", "m2"]))))).await;

        assert_eq!(
            items,
            vec![Ok(strings(&["m1"])), Ok(strings(&["m1", "m2"]))]
        );
        assert_eq!(store.list("netA").await, Some(strings(&["m1", "m2"])));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.set_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_first_item_is_cached_even_when_remote_is_slow() {
        let store = Arc::new(MockStore::default().with_list("netA", &["stale"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let (tx, rx) = oneshot::channel::<Vec<String>>();

        let mut stream = fetcher.fetch(key("netA"), async move {
            rx.await
                .map_err(|e| RemoteQueryError::ConnectionFailed(e.to_string()))
        });

        assert_eq!(stream.next().await, Some(Ok(strings(&["stale"]))));

        tx.send(strings(&["fresh"])).unwrap();
        assert_eq!(stream.next().await, Some(Ok(strings(&["fresh"]))));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_fresh_list_replaces_cached_list() {
        let store = Arc::new(MockStore::default().with_list("netA", &["x", "y"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["z"]))))).await;

        assert_eq!(store.list("netA").await, Some(strings(&["z"])));
    }

    #[tokio::test]
    async fn test_miss_emits_only_fresh_list() {
        let store = Arc::new(MockStore::default());
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["m1"]))))).await;

        assert_eq!(items, vec![Ok(strings(&["m1"]))]);
        assert_eq!(store.list("netA").await, Some(strings(&["m1"])));
    }

    #[tokio::test]
    async fn test_miss_with_empty_remote_result_emits_once() {
        let store = Arc::new(MockStore::default());
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(Vec::new())))).await;

        assert_eq!(items, vec![Ok(Vec::new())]);
        assert_eq!(store.list("netA").await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_absent_partition_key_skips_remote_and_cache() {
        let store = Arc::new(MockStore::default().with_list("netA", &["m1"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        let items = collect(fetcher.fetch(None, counted_query(&calls, Ok(strings(&["m1"]))))).await;

        assert_eq!(items, vec![Ok(Vec::new())]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.get_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.set_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_after_cached_emission_leaves_cache_unchanged() {
        let store = Arc::new(MockStore::default().with_list("netA", &["m1"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));
        let failure = RemoteQueryError::ServerError {
            status: 500,
            message: "Internal".to_string(),
        };

        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Err(failure.clone())))).await;

        assert_eq!(
            items,
            vec![Ok(strings(&["m1"])), Err(FetchError::Remote(failure))]
        );
        assert_eq!(store.list("netA").await, Some(strings(&["m1"])));
        assert_eq!(store.set_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_on_miss_emits_only_error() {
        let store = Arc::new(MockStore::default());
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));
        let failure = RemoteQueryError::ConnectionFailed("refused".to_string());

        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Err(failure.clone())))).await;

        assert_eq!(items, vec![Err(FetchError::Remote(failure))]);
        assert_eq!(store.list("netA").await, None);
    }

    #[tokio::test]
    async fn test_repeated_fetch_with_same_result_is_stable() {
        let store = Arc::new(MockStore::default());
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["a", "b"]))))).await;
        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["a", "b"]))))).await;

        assert_eq!(items, vec![Ok(strings(&["a", "b"])), Ok(strings(&["a", "b"]))]);
        assert_eq!(store.list("netA").await, Some(strings(&["a", "b"])));
    }

    #[tokio::test]
    async fn test_never_more_than_two_emissions() {
        let store = Arc::new(MockStore::default().with_list("netA", &["m1"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let items =
                collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["m1"]))))).await;
            assert_eq!(items.len(), 2);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_partitions_are_independent() {
        let store = Arc::new(MockStore::default().with_list("netB", &["b1"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["a1"]))))).await;

        assert_eq!(store.list("netA").await, Some(strings(&["a1"])));
        assert_eq!(store.list("netB").await, Some(strings(&["b1"])));
    }

    #[tokio::test]
    async fn test_cache_read_failure_degrades_to_miss() {
        let store = Arc::new(MockStore {
            fail_get: true,
            ..MockStore::default()
        });
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["m1"]))))).await;

        assert_eq!(items, vec![Ok(strings(&["m1"]))]);
        assert_eq!(store.get_calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.set_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cache_write_failure_still_delivers_fresh_list() {
        let store = Arc::new(MockStore {
            fail_set: true,
            ..MockStore::default()
        });
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        let items = collect(fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["m1"]))))).await;

        assert_eq!(
            items,
            vec![
                Ok(strings(&["m1"])),
                Err(FetchError::Storage(CacheError::OperationFailed(
                    "disk full".to_string()
                )))
            ]
        );
    }

    #[tokio::test]
    async fn test_query_starts_before_cache_hit_is_consumed() {
        let store = Arc::new(MockStore::default().with_list("netA", &["m1"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut stream = fetcher.fetch(key("netA"), counted_query(&calls, Ok(strings(&["m2"]))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(stream.next().await, Some(Ok(strings(&["m1"]))));
        // The spawned query runs as soon as the test task yields.
        tokio::task::yield_now().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dropped_stream_aborts_query_and_skips_write() {
        let store = Arc::new(MockStore::default().with_list("netA", &["m1"]).await);
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let completed = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = oneshot::channel::<Vec<String>>();

        let done = Arc::clone(&completed);
        let mut stream = fetcher.fetch(key("netA"), async move {
            let fresh = rx
                .await
                .map_err(|e| RemoteQueryError::ConnectionFailed(e.to_string()))?;
            done.fetch_add(1, Ordering::SeqCst);
            Ok::<_, RemoteQueryError>(fresh)
        });

        assert_eq!(stream.next().await, Some(Ok(strings(&["m1"]))));
        drop(stream);

        let _ = tx.send(strings(&["m2"]));
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(completed.load(Ordering::SeqCst), 0);
        assert_eq!(store.set_calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.list("netA").await, Some(strings(&["m1"])));
    }

    #[tokio::test]
    async fn test_concurrent_fetches_last_writer_wins() {
        let store = Arc::new(MockStore::default());
        let fetcher = ReadThrough::new(Arc::clone(&store));
        let (first_tx, first_rx) = oneshot::channel::<Vec<String>>();
        let (second_tx, second_rx) = oneshot::channel::<Vec<String>>();

        let first = fetcher.fetch(key("netA"), async move {
            first_rx
                .await
                .map_err(|e| RemoteQueryError::ConnectionFailed(e.to_string()))
        });
        let second = fetcher.fetch(key("netA"), async move {
            second_rx
                .await
                .map_err(|e| RemoteQueryError::ConnectionFailed(e.to_string()))
        });
        let first = tokio::spawn(collect(first));
        let second = tokio::spawn(collect(second));

        // The fetch started first completes last and overwrites the other.
        second_tx.send(strings(&["second"])).unwrap();
        second.await.unwrap();
        first_tx.send(strings(&["first"])).unwrap();
        first.await.unwrap();

        assert_eq!(store.list("netA").await, Some(strings(&["first"])));
        assert_eq!(store.set_calls.load(Ordering::SeqCst), 2);
    }
}
