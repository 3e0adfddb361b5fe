//! Cell configuration
//!
//! The codec is chosen once, when the cell is built, and never changes:
//!
//! | Configuration | Codec |
//! |---------------|-------|
//! | [`CellOptions::raw`] | [`RawCodec`]: strings stored verbatim |
//! | [`CellOptions::custom`] | caller's serializer/deserializer pair |
//! | [`CellOptions::with_codec`] | any [`Codec`], e.g. [`PatternCodec`](stash_wire::PatternCodec) |
//! | [`CellOptions::default`] | [`JsonCodec`] |

use crate::cell::PersistentCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use stash_core::{CodecError, Result};
use stash_storage::{Backend, ExternalStore};
use stash_wire::{Codec, FnCodec, JsonCodec, RawCodec};
use std::fmt;

/// Codec selection for a [`PersistentCell`]
pub struct CellOptions<T> {
    pub(crate) codec: Box<dyn Codec<T>>,
}

impl<T: 'static> CellOptions<T> {
    /// Store the value's string form and read it back without parsing
    pub fn raw() -> Self
    where
        RawCodec: Codec<T>,
    {
        Self::with_codec(RawCodec)
    }

    /// Structural JSON encoding (the default)
    pub fn json() -> Self
    where
        T: Serialize + DeserializeOwned,
    {
        Self::with_codec(JsonCodec)
    }

    /// Caller-supplied serializer and deserializer
    ///
    /// # Example
    ///
    /// ```
    /// use stash_cell::CellOptions;
    /// use stash_core::CodecError;
    ///
    /// let options = CellOptions::<u8>::custom(
    ///     |v: &u8| Ok(format!("{:02x}", v)),
    ///     |raw: &str| u8::from_str_radix(raw, 16).map_err(|e| CodecError::Decode(e.to_string())),
    /// );
    /// # let _ = options;
    /// ```
    pub fn custom<E, D>(serializer: E, deserializer: D) -> Self
    where
        E: Fn(&T) -> std::result::Result<String, CodecError> + 'static,
        D: Fn(&str) -> std::result::Result<T, CodecError> + 'static,
    {
        Self::with_codec(FnCodec::new(serializer, deserializer))
    }

    /// Any codec
    pub fn with_codec(codec: impl Codec<T> + 'static) -> Self {
        Self {
            codec: Box::new(codec),
        }
    }
}

impl<T> Default for CellOptions<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn default() -> Self {
        Self::json()
    }
}

impl<T> fmt::Debug for CellOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellOptions").finish_non_exhaustive()
    }
}

/// Builder for a [`PersistentCell`]
///
/// # Example
///
/// ```
/// use stash_cell::PersistentCell;
/// use stash_storage::MemoryStore;
///
/// let cell = PersistentCell::<String>::builder("greeting")
///     .initial("hello".to_string())
///     .raw()
///     .store(MemoryStore::new())
///     .bind()
///     .unwrap();
/// assert_eq!(cell.get().map(String::as_str), Some("hello"));
/// ```
pub struct CellBuilder<T> {
    key: String,
    initial: Option<T>,
    options: CellOptions<T>,
    backend: Backend,
}

impl<T: Clone + 'static> CellBuilder<T> {
    /// Start a builder with explicit options
    ///
    /// Use this for value types the JSON codec cannot handle.
    pub fn with_options(key: impl Into<String>, options: CellOptions<T>) -> Self {
        Self {
            key: key.into(),
            initial: None,
            options,
            backend: Backend::Unavailable,
        }
    }

    /// Value used to seed an empty slot and as the fallback on failure
    pub fn initial(mut self, value: T) -> Self {
        self.initial = Some(value);
        self
    }

    /// Replace the codec selection
    pub fn options(mut self, options: CellOptions<T>) -> Self {
        self.options = options;
        self
    }

    /// Use the raw codec
    pub fn raw(self) -> Self
    where
        RawCodec: Codec<T>,
    {
        self.options(CellOptions::raw())
    }

    /// Use a specific codec
    pub fn codec(self, codec: impl Codec<T> + 'static) -> Self {
        self.options(CellOptions::with_codec(codec))
    }

    /// Use a backend (defaults to [`Backend::Unavailable`])
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Use a store
    pub fn store(self, store: impl ExternalStore + 'static) -> Self {
        self.backend(Backend::new(store))
    }

    /// Use whatever store the environment provides
    pub fn detect_backend(self) -> Self {
        self.backend(Backend::detect())
    }

    /// Bind the cell, running its initialization
    ///
    /// Fails only if the key is empty.
    pub fn bind(self) -> Result<PersistentCell<T>> {
        PersistentCell::bind_with(self.key, self.initial, self.options, self.backend)
    }
}

impl<T> CellBuilder<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    /// Start a builder with the JSON codec
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_options(key, CellOptions::default())
    }
}

impl<T> fmt::Debug for CellBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellBuilder")
            .field("key", &self.key)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
