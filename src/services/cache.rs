// classifieds/src/services/cache.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{Category, CategoryFieldsResponse};
use crate::services::api_service::{CatalogApi, FieldQueryOptions};

type FieldsKey = (String, FieldQueryOptions);

pub const DEFAULT_MAX_FIELD_ENTRIES: usize = 512;

/// Keeps catalog responses for `ttl`. Fallback values are cached the same
/// way as real responses.
pub struct CachedCatalogApi<A> {
    inner: A,
    ttl: Duration,
    max_field_entries: usize,
    categories: RwLock<Option<(Instant, Vec<Category>)>>,
    fields: RwLock<HashMap<FieldsKey, (Instant, CategoryFieldsResponse)>>,
}

impl<A: CatalogApi> CachedCatalogApi<A> {
    pub fn new(inner: A, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            max_field_entries: DEFAULT_MAX_FIELD_ENTRIES,
            categories: RwLock::new(None),
            fields: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_max_field_entries(mut self, max: usize) -> Self {
        self.max_field_entries = max.max(1);
        self
    }

    fn is_fresh(&self, stored_at: Instant) -> bool {
        stored_at.elapsed() < self.ttl
    }

    pub async fn cached_field_entries(&self) -> usize {
        self.fields.read().await.len()
    }

    /// Drops expired entries, then the oldest ones until `key` fits.
    async fn store_fields(&self, key: FieldsKey, fields: CategoryFieldsResponse) {
        let mut cache = self.fields.write().await;
        cache.retain(|_, (stored_at, _)| stored_at.elapsed() < self.ttl);

        while cache.len() >= self.max_field_entries && !cache.contains_key(&key) {
            let oldest = cache
                .iter()
                .min_by_key(|(_, (stored_at, _))| *stored_at)
                .map(|(key, _)| key.clone());
            match oldest {
                Some(oldest) => {
                    debug!("Evicting cached fields for {}", oldest.0);
                    cache.remove(&oldest);
                }
                None => break,
            }
        }
        cache.insert(key, (Instant::now(), fields));
    }

    pub async fn invalidate(&self) {
        *self.categories.write().await = None;
        self.fields.write().await.clear();
    }
}

#[async_trait]
impl<A: CatalogApi> CatalogApi for CachedCatalogApi<A> {
    async fn fetch_categories(&self) -> Vec<Category> {
        if let Some((stored_at, categories)) = self.categories.read().await.as_ref() {
            if self.is_fresh(*stored_at) {
                return categories.clone();
            }
        }

        let categories = self.inner.fetch_categories().await;
        *self.categories.write().await = Some((Instant::now(), categories.clone()));
        categories
    }

    async fn fetch_category_fields(&self, slugs: &[&str], options: FieldQueryOptions) -> CategoryFieldsResponse {
        let key = (slugs.join(","), options);
        if let Some((stored_at, fields)) = self.fields.read().await.get(&key) {
            if self.is_fresh(*stored_at) {
                debug!("Category fields cache hit for {}", key.0);
                return fields.clone();
            }
        }

        let fields = self.inner.fetch_category_fields(slugs, options).await;
        self.store_fields(key, fields.clone()).await;
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fallback_categories;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingApi {
        category_calls: AtomicUsize,
        field_calls: AtomicUsize,
    }

    #[async_trait]
    impl CatalogApi for CountingApi {
        async fn fetch_categories(&self) -> Vec<Category> {
            self.category_calls.fetch_add(1, Ordering::SeqCst);
            fallback_categories()
        }

        async fn fetch_category_fields(&self, _slugs: &[&str], _options: FieldQueryOptions) -> CategoryFieldsResponse {
            self.field_calls.fetch_add(1, Ordering::SeqCst);
            CategoryFieldsResponse::empty()
        }
    }

    #[tokio::test]
    async fn test_fresh_entries_are_served_from_cache() {
        let cached = CachedCatalogApi::new(CountingApi::default(), Duration::from_secs(60));
        cached.fetch_categories().await;
        cached.fetch_categories().await;
        cached.fetch_category_fields(&["jobs"], FieldQueryOptions::default()).await;
        cached.fetch_category_fields(&["jobs"], FieldQueryOptions::default()).await;
        cached.fetch_category_fields(&["pets"], FieldQueryOptions::default()).await;

        assert_eq!(cached.inner.category_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cached.inner.field_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_expired_entries_are_refetched() {
        let cached = CachedCatalogApi::new(CountingApi::default(), Duration::ZERO);
        cached.fetch_category_fields(&["jobs"], FieldQueryOptions::default()).await;
        cached.fetch_category_fields(&["jobs"], FieldQueryOptions::default()).await;
        assert_eq!(cached.inner.field_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_expired_entries_are_evicted_on_insert() {
        let cached = CachedCatalogApi::new(CountingApi::default(), Duration::ZERO);
        for slug in ["jobs", "pets", "random-1", "random-2"] {
            cached.fetch_category_fields(&[slug], FieldQueryOptions::default()).await;
        }
        assert_eq!(cached.cached_field_entries().await, 1);
    }

    #[tokio::test]
    async fn test_oldest_entry_is_evicted_at_capacity() {
        let cached = CachedCatalogApi::new(CountingApi::default(), Duration::from_secs(60)).with_max_field_entries(2);
        for slug in ["jobs", "pets", "kids"] {
            cached.fetch_category_fields(&[slug], FieldQueryOptions::default()).await;
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
        assert_eq!(cached.cached_field_entries().await, 2);

        cached.fetch_category_fields(&["kids"], FieldQueryOptions::default()).await;
        cached.fetch_category_fields(&["pets"], FieldQueryOptions::default()).await;
        assert_eq!(cached.inner.field_calls.load(Ordering::SeqCst), 3);

        cached.fetch_category_fields(&["jobs"], FieldQueryOptions::default()).await;
        assert_eq!(cached.inner.field_calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_invalidate_drops_everything() {
        let cached = CachedCatalogApi::new(CountingApi::default(), Duration::from_secs(60));
        cached.fetch_categories().await;
        cached.invalidate().await;
        cached.fetch_categories().await;
        assert_eq!(cached.inner.category_calls.load(Ordering::SeqCst), 2);
    }
}
