//! In-memory store
//!
//! [`MemoryStore`] is a `HashMap` behind a `parking_lot::RwLock`. Clones share
//! the same map, so a test can hand one clone to a cell and inspect the other.
//!
//! An optional byte quota models the capacity limit of browser storage:
//! a write that would push the total size of keys and values past the quota
//! fails with [`StoreError::QuotaExceeded`] and leaves the map unchanged.

use crate::traits::ExternalStore;
use parking_lot::RwLock;
use stash_core::StoreError;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl Inner {
    fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| entry_size(k, v)).sum()
    }
}

fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Shared in-process key-value store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// Create an empty, unbounded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `bytes` of keys plus values
    pub fn with_quota(bytes: usize) -> Self {
        let store = Self::new();
        store.inner.write().quota = Some(bytes);
        store
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Check if `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().entries.contains_key(key)
    }

    /// Total size of keys plus values, in bytes
    pub fn used_bytes(&self) -> usize {
        self.inner.read().used_bytes()
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.inner.write().entries.clear();
    }

    /// Copy of the current contents, ordered by key
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner
            .read()
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl ExternalStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.read().entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write();

        if let Some(quota) = inner.quota {
            let existing = inner
                .entries
                .get(key)
                .map(|old| entry_size(key, old))
                .unwrap_or(0);
            let others = inner.used_bytes() - existing;
            let requested = entry_size(key, value);
            if others + requested > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    requested,
                    available: quota.saturating_sub(others),
                });
            }
        }

        inner.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.inner.write().entries.remove(key);
        Ok(())
    }
}
