//! Process-wide, populate-once cache of the question bank.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::models::RawRecord;
use crate::source::{QuestionSource, SourceError};

/// Lazily populated cache of the full record set.
///
/// The first caller triggers a single upstream fetch; callers arriving while
/// that fetch is in flight await its outcome instead of fetching themselves.
/// A failed population leaves the cache empty so a later request retries.
/// Once populated, the record set is immutable for the process lifetime and
/// `get_all` is a cheap `Arc` clone.
pub struct QuestionCache {
    source: Arc<dyn QuestionSource>,
    records: OnceCell<Arc<Vec<RawRecord>>>,
}

impl QuestionCache {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            records: OnceCell::new(),
        }
    }

    pub async fn get_all(&self) -> Result<Arc<Vec<RawRecord>>, SourceError> {
        let records = self
            .records
            .get_or_try_init(|| async {
                let fetched = self.source.fetch_all().await?;
                tracing::info!("loaded {} questions into cache", fetched.len());
                Ok::<_, SourceError>(Arc::new(fetched))
            })
            .await?;

        Ok(records.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Fake source counting fetches, optionally failing the first N of them.
    struct CountingSource {
        records: Vec<RawRecord>,
        fetch_count: AtomicU32,
        failures: AtomicU32,
    }

    impl CountingSource {
        fn new(count: usize) -> Self {
            let records = (0..count)
                .map(|i| {
                    serde_json::from_value(serde_json::json!({
                        "_id": i,
                        "title2": format!("שאלה {i}"),
                    }))
                    .unwrap()
                })
                .collect();
            Self {
                records,
                fetch_count: AtomicU32::new(0),
                failures: AtomicU32::new(0),
            }
        }

        fn failing_first(count: usize, failures: u32) -> Self {
            let source = Self::new(count);
            source.failures.store(failures, Ordering::SeqCst);
            source
        }

        fn fetch_count(&self) -> u32 {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuestionSource for CountingSource {
        async fn fetch_all(&self) -> Result<Vec<RawRecord>, SourceError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            if self.failures.load(Ordering::SeqCst) > 0 {
                self.failures.fetch_sub(1, Ordering::SeqCst);
                return Err(SourceError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                ));
            }
            Ok(self.records.clone())
        }
    }

    #[tokio::test]
    async fn concurrent_first_callers_trigger_one_fetch() {
        let source = Arc::new(CountingSource::new(10));
        let cache = Arc::new(QuestionCache::new(source.clone()));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move { cache.get_all().await }));
        }

        for handle in handles {
            let records = handle.await.unwrap().unwrap();
            assert_eq!(records.len(), 10);
        }

        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn repeated_calls_reuse_the_populated_set() {
        let source = Arc::new(CountingSource::new(3));
        let cache = QuestionCache::new(source.clone());

        let first = cache.get_all().await.unwrap();
        let second = cache.get_all().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn failed_population_retries_on_the_next_call() {
        let source = Arc::new(CountingSource::failing_first(4, 1));
        let cache = QuestionCache::new(source.clone());

        assert!(cache.get_all().await.is_err());

        let records = cache.get_all().await.unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn empty_upstream_is_cached_as_empty() {
        let source = Arc::new(CountingSource::new(0));
        let cache = QuestionCache::new(source.clone());

        assert!(cache.get_all().await.unwrap().is_empty());
        assert!(cache.get_all().await.unwrap().is_empty());
        assert_eq!(source.fetch_count(), 1);
    }
}
