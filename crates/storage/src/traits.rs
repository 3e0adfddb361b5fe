//! The external store contract

use stash_core::StoreError;
use std::sync::Arc;

/// Synchronous, process-wide key-value surface
///
/// Implementations are shared mutable state: every method takes `&self` and
/// uses interior mutability. There is no cross-key atomicity and no locking
/// beyond what a single call needs.
///
/// Any method may fail under resource pressure (quota, permissions, privacy
/// mode). Callers that must never fail, such as a persistent cell, are
/// expected to absorb these errors themselves.
pub trait ExternalStore {
    /// Read the string stored at `key`
    ///
    /// Returns `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` at `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`
    ///
    /// Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: ExternalStore + ?Sized> ExternalStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: ExternalStore + ?Sized> ExternalStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
