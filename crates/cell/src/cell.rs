//! PersistentCell implementation
//!
//! ## Lifecycle
//!
//! 1. **Bind**: validate the key, resolve the codec, run initialization
//! 2. **Initialize**: read-through from the store, or seed it from the
//!    initial value when the slot is empty
//! 3. **Mutate**: `set`/`update`/`remove` write to the store first and
//!    update the in-memory mirror only when the store accepts the change
//! 4. **Rebind**: switching keys discards the mirror and initializes again
//!    under the new key before returning
//!
//! ## Failure absorption
//!
//! The `try_*` steps return `Result`. Public operations turn every `Err`
//! into "no state change" and log it; the only error a caller ever sees is
//! [`Error::InvalidKey`](stash_core::Error::InvalidKey).
//!
//! ## Detached cells
//!
//! With [`Backend::Unavailable`] the cell is detached: its value is the
//! initial value, and mutations are silent no-ops.

use crate::options::{CellBuilder, CellOptions};
use serde::de::DeserializeOwned;
use serde::Serialize;
use stash_core::{Key, Result};
use stash_storage::{Backend, ExternalStore};
use stash_wire::Codec;
use std::fmt;
use tracing::{debug, warn};

/// In-memory value mirrored to one slot of an external store
pub struct PersistentCell<T> {
    key: Key,
    initial: Option<T>,
    codec: Box<dyn Codec<T>>,
    backend: Backend,
    state: Option<T>,
}

impl<T> PersistentCell<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    /// Bind `key` with the JSON codec
    ///
    /// Fails only if the key is empty.
    pub fn bind(key: impl Into<String>, initial: Option<T>, backend: Backend) -> Result<Self> {
        Self::bind_with(key, initial, CellOptions::default(), backend)
    }

    /// Start a [`CellBuilder`] with the JSON codec
    pub fn builder(key: impl Into<String>) -> CellBuilder<T> {
        CellBuilder::new(key)
    }
}

impl<T: Clone + 'static> PersistentCell<T> {
    /// Bind `key` with explicit codec options
    ///
    /// Fails only if the key is empty. Store and codec failures during
    /// initialization leave the cell holding `initial`.
    pub fn bind_with(
        key: impl Into<String>,
        initial: Option<T>,
        options: CellOptions<T>,
        backend: Backend,
    ) -> Result<Self> {
        let key = Key::new(key)?;
        let mut cell = Self {
            key,
            initial,
            codec: options.codec,
            backend,
            state: None,
        };
        cell.initialize();
        Ok(cell)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current value
    ///
    /// Served from memory; the store is not consulted.
    pub fn get(&self) -> Option<&T> {
        self.state.as_ref()
    }

    /// The bound key
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The initial (fallback) value
    pub fn initial(&self) -> Option<&T> {
        self.initial.as_ref()
    }

    /// Check whether the cell has no store behind it
    pub fn is_detached(&self) -> bool {
        !self.backend.is_available()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Persist `value`
    ///
    /// On success the cell holds `decode(encode(value))`. On any failure the
    /// cell and the store keep their previous contents.
    pub fn set(&mut self, value: T) {
        self.commit(&value);
    }

    /// Persist the value computed from the current one
    ///
    /// Returning `None` from `f` cancels the write: neither the store nor the
    /// cell changes.
    ///
    /// ```
    /// use stash_cell::PersistentCell;
    /// use stash_storage::{Backend, MemoryStore};
    ///
    /// let mut counter = PersistentCell::bind("count", Some(1u32), Backend::new(MemoryStore::new())).unwrap();
    /// counter.update(|n| n.map(|n| n + 1));
    /// assert_eq!(counter.get(), Some(&2));
    ///
    /// counter.update(|_| None);
    /// assert_eq!(counter.get(), Some(&2));
    /// ```
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(Option<&T>) -> Option<T>,
    {
        match f(self.state.as_ref()) {
            Some(candidate) => self.commit(&candidate),
            None => debug!(key = %self.key, "update cancelled"),
        }
    }

    /// Remove the slot from the store
    ///
    /// On success the cell becomes empty. On failure nothing changes.
    pub fn remove(&mut self) {
        let Some(store) = self.backend.store() else {
            return;
        };
        match self.try_remove(store) {
            Ok(()) => self.state = None,
            Err(e) => warn!(key = %self.key, error = %e, "remove absorbed"),
        }
    }

    // =========================================================================
    // Rebinding
    // =========================================================================

    /// Switch to `key`, keeping the initial value
    ///
    /// Initialization runs again under the new key before this returns.
    /// Rebinding to the current key does nothing. The old slot is left as
    /// it is.
    pub fn rebind(&mut self, key: impl Into<String>) -> Result<()> {
        let key = Key::new(key)?;
        if key == self.key {
            return Ok(());
        }
        debug!(from = %self.key, to = %key, "rebinding cell");
        self.key = key;
        self.initialize();
        Ok(())
    }

    /// Switch to `key` with a new initial value
    ///
    /// Unlike [`rebind`](Self::rebind), this always re-runs initialization,
    /// even when the key is unchanged.
    pub fn rebind_with(&mut self, key: impl Into<String>, initial: Option<T>) -> Result<()> {
        let key = Key::new(key)?;
        debug!(from = %self.key, to = %key, "rebinding cell with new initial value");
        self.key = key;
        self.initial = initial;
        self.initialize();
        Ok(())
    }

    // =========================================================================
    // Internal steps
    // =========================================================================

    fn initialize(&mut self) {
        self.state = match self.backend.store() {
            None => {
                debug!(key = %self.key, "no backend, cell is detached");
                self.initial.clone()
            }
            Some(store) => match self.try_initialize(store) {
                Ok(state) => state,
                Err(e) => {
                    warn!(key = %self.key, error = %e, "initialization fell back to initial value");
                    self.initial.clone()
                }
            },
        };
    }

    fn try_initialize(&self, store: &dyn ExternalStore) -> Result<Option<T>> {
        if let Some(raw) = self.try_read(store)? {
            return Ok(Some(self.codec.decode(&raw)?));
        }
        if let Some(initial) = &self.initial {
            match self.try_seed(store, initial) {
                Ok(()) => debug!(key = %self.key, "seeded store with initial value"),
                Err(e) => warn!(key = %self.key, error = %e, "seeding absorbed"),
            }
        }
        Ok(self.initial.clone())
    }

    fn try_read(&self, store: &dyn ExternalStore) -> Result<Option<String>> {
        Ok(store.get(self.key.as_str())?)
    }

    fn try_seed(&self, store: &dyn ExternalStore, initial: &T) -> Result<()> {
        let encoded = self.codec.encode(initial)?;
        store.set(self.key.as_str(), &encoded)?;
        Ok(())
    }

    /// Encode, derive the mirror, then persist
    ///
    /// The mirror is derived before the store is touched, so a value that
    /// does not survive its own codec never reaches the store.
    fn try_write(&self, store: &dyn ExternalStore, candidate: &T) -> Result<T> {
        let encoded = self.codec.encode(candidate)?;
        let mirror = self.codec.decode(&encoded)?;
        store.set(self.key.as_str(), &encoded)?;
        Ok(mirror)
    }

    fn try_remove(&self, store: &dyn ExternalStore) -> Result<()> {
        Ok(store.remove(self.key.as_str())?)
    }

    fn commit(&mut self, candidate: &T) {
        let Some(store) = self.backend.store() else {
            return;
        };
        match self.try_write(store, candidate) {
            Ok(mirror) => self.state = Some(mirror),
            Err(e) => warn!(key = %self.key, error = %e, "write absorbed"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentCell")
            .field("key", &self.key)
            .field("state", &self.state)
            .field("initial", &self.initial)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
