//! JSON slot helpers
//!
//! Thin typed accessors for code that wants to read or write a store slot
//! directly, without a cell. Unlike a cell, these surface every error.

use crate::{CodecError, ExternalStore, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// JSON get/set on any [`ExternalStore`]
///
/// # Example
///
/// ```
/// use stashcell::{ExternalStore, MemoryStore, StoreExt};
///
/// let store = MemoryStore::new();
/// store.set_json("thirdString", &"hello")?;
/// assert_eq!(store.get("thirdString")?.as_deref(), Some(r#""hello""#));
///
/// let value: Option<String> = store.get_json("thirdString")?;
/// assert_eq!(value.as_deref(), Some("hello"));
/// # Ok::<(), stashcell::Error>(())
/// ```
pub trait StoreExt: ExternalStore {
    /// Read and parse the JSON stored at `key`
    ///
    /// An absent slot and an empty string both read as `None`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) if !raw.is_empty() => {
                let value = serde_json::from_str(&raw).map_err(CodecError::from)?;
                Ok(Some(value))
            }
            _ => {
                debug!(key, "slot is absent or empty");
                Ok(None)
            }
        }
    }

    /// Serialize `value` as JSON and store it at `key`
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(CodecError::from)?;
        self.set(key, &raw)?;
        Ok(())
    }
}

impl<S: ExternalStore + ?Sized> StoreExt for S {}
