//! In-process [`Cache`] implementation.

use crate::{Cache, Record};

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// A concurrent map of cached results with optional per-entry expiry.
///
/// Expired entries are dropped lazily when read.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, Entry>,
}

#[derive(Debug)]
struct Entry {
    records: Vec<Record>,
    expires_at: Option<Instant>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Option<Vec<Record>> {
        let now = Instant::now();
        let expired = |entry: &Entry| entry.expires_at.is_some_and(|at| at <= now);

        {
            // The read guard must be released before removing.
            let entry = self.entries.get(key)?;
            if !expired(&entry) {
                return Some(entry.records.clone());
            }
        }

        self.entries.remove_if(key, |_, entry| expired(entry));
        None
    }

    fn put(&self, key: &str, value: Vec<Record>) {
        self.entries.insert(
            key.to_string(),
            Entry {
                records: value,
                expires_at: None,
            },
        );
    }

    fn put_with_ttl(&self, key: &str, value: Vec<Record>, ttl: Duration) {
        self.entries.insert(
            key.to_string(),
            Entry {
                records: value,
                expires_at: Some(Instant::now() + ttl),
            },
        );
    }
}
