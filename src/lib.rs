//! # Stashcell
//!
//! Typed in-memory cells mirrored to a synchronous key-value store.
//!
//! A [`PersistentCell`] keeps a value in memory and a copy of it in an
//! [`ExternalStore`] such as browser `localStorage`, a directory of files, or
//! an in-process map. Binding a cell reads the stored copy back, so the value
//! survives reloads and restarts. Failures of the store or of the codec never
//! reach the caller; the cell simply keeps its previous value.
//!
//! ## Quick Start
//!
//! ```
//! use stashcell::prelude::*;
//!
//! let store = MemoryStore::new();
//! let mut cell = PersistentCell::builder("myString")
//!     .initial("foo".to_string())
//!     .store(store.clone())
//!     .bind()?;
//!
//! cell.set("bar".to_string());
//! assert_eq!(cell.get().map(String::as_str), Some("bar"));
//!
//! // A second cell on the same key reads the persisted value
//! let again = PersistentCell::<String>::bind("myString", None, Backend::new(store))?;
//! assert_eq!(again.get().map(String::as_str), Some("bar"));
//! # Ok::<(), stashcell::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`stash_core`]: [`Key`] and the error taxonomy
//! - [`stash_storage`]: [`ExternalStore`], [`Backend`] and the bundled stores
//! - [`stash_wire`]: [`Codec`] and the bundled codecs
//! - [`stash_cell`]: [`PersistentCell`] and its configuration
//!
//! [`StoreExt`] adds untyped JSON helpers on top of any store.

#![warn(missing_docs)]

mod slots;

pub mod prelude;

// Error handling
pub use stash_core::{CodecError, Error, Key, Result, StoreError};

// Stores
pub use stash_storage::{Backend, ExternalStore, FileStore, MemoryStore};
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use stash_storage::WebStorage;

// Codecs
pub use stash_wire::{
    Codec, Field, FnCodec, JsonCodec, Pattern, PatternCodec, PatternRecord, RawCodec,
    SENTINEL_CLOSE, SENTINEL_OPEN,
};

// Cells
pub use stash_cell::{CellBuilder, CellOptions, PersistentCell};

pub use slots::StoreExt;
