//! Cache of successful media resolutions to avoid redundant resolver calls

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::model::types::ResolvedMedia;
use crate::resolver::MediaResolver;

/// Memoizes `query -> ResolvedMedia` for the lifetime of one playlist.
///
/// Only successful resolutions are stored, so a failing track can be
/// retried when it is revisited. Concurrent calls for the same query are
/// not deduplicated in flight; at most the playback and prefetch paths
/// race on one key, and the cost is a redundant resolver call.
#[derive(Clone, Default)]
pub struct ResolutionCache {
    entries: Arc<RwLock<HashMap<String, ResolvedMedia>>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, query: &str) -> Option<ResolvedMedia> {
        let entries = self.entries.read().await;
        entries.get(query).cloned()
    }

    pub async fn contains(&self, query: &str) -> bool {
        let entries = self.entries.read().await;
        entries.contains_key(query)
    }

    pub async fn insert(&self, query: String, media: ResolvedMedia) {
        let mut entries = self.entries.write().await;
        entries.insert(query, media);
    }

    /// Drop all entries. Called once per new playlist load, before the
    /// first track of the new playlist is requested.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Return the cached entry for `query`, or delegate to the resolver and
    /// store the result on success. Failures are returned uncached.
    pub async fn get_or_resolve(
        &self,
        query: &str,
        resolver: &dyn MediaResolver,
    ) -> Result<ResolvedMedia> {
        if let Some(hit) = self.get(query).await {
            tracing::debug!(query, "resolution cache hit");
            return Ok(hit);
        }

        let media = resolver.resolve_media(query).await?;
        self.insert(query.to_string(), media.clone()).await;
        tracing::debug!(query, "resolution cached");
        Ok(media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::types::Track;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingResolver {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingResolver {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MediaResolver for CountingResolver {
        async fn fetch_tracks(&self, _url: &str) -> Result<Vec<Track>> {
            Ok(Vec::new())
        }

        async fn resolve_media(&self, query: &str) -> Result<ResolvedMedia> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::resolve(query, "not found"));
            }
            Ok(ResolvedMedia {
                audio_url: format!("https://cdn.example/{query}.m4a"),
                resolved_title: None,
                thumbnail: None,
                youtube_url: None,
            })
        }
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let cache = ResolutionCache::new();
        let resolver = CountingResolver::new(false);

        let first = cache.get_or_resolve("a - b", &resolver).await.unwrap();
        let second = cache.get_or_resolve("a - b", &resolver).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(resolver.calls(), 1);
    }

    #[tokio::test]
    async fn failed_resolutions_are_not_cached() {
        let cache = ResolutionCache::new();
        let resolver = CountingResolver::new(true);

        assert!(cache.get_or_resolve("bad", &resolver).await.is_err());
        assert!(cache.get_or_resolve("bad", &resolver).await.is_err());

        // Each attempt went back to the resolver.
        assert_eq!(resolver.calls(), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn clear_empties_the_cache() {
        let cache = ResolutionCache::new();
        let resolver = CountingResolver::new(false);

        cache.get_or_resolve("x", &resolver).await.unwrap();
        assert_eq!(cache.len().await, 1);

        cache.clear().await;
        assert!(cache.is_empty().await);
        assert!(!cache.contains("x").await);
    }
}
