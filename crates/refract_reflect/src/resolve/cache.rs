//! Concurrent cache of resolved methods.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use refract_ir::MethodInfo;

/// Resolved methods keyed by `"<class>#<signature>"`.
///
/// Entries are never evicted. Two threads resolving the same key at once
/// may both compute and insert; the later insert wins and both results are
/// equal, so callers cannot observe the race.
#[derive(Debug, Default)]
pub struct SignatureCache {
    entries: DashMap<String, Arc<MethodInfo>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Counters reported by [`SignatureCache::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

impl SignatureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`, counting the hit or miss.
    pub fn get(&self, key: &str) -> Option<Arc<MethodInfo>> {
        let found = self.entries.get(key).map(|entry| Arc::clone(entry.value()));
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    pub fn insert(&self, key: String, method: Arc<MethodInfo>) {
        self.entries.insert(key, method);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}
