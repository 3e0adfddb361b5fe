//! Persistent cells
//!
//! A [`PersistentCell`] binds a key to a typed value held in memory and
//! mirrored into an [`ExternalStore`](stash_storage::ExternalStore):
//! - reads come from memory and never touch the store
//! - writes and removals go to the store first and update memory only on
//!   success
//! - backend and codec failures are absorbed; only an empty key is an error
//!
//! ## Example
//!
//! ```
//! use stash_cell::PersistentCell;
//! use stash_storage::{Backend, ExternalStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let mut cell = PersistentCell::bind("myString", Some("foo".to_string()), Backend::new(store.clone())).unwrap();
//!
//! assert_eq!(cell.get().map(String::as_str), Some("foo"));
//! assert_eq!(store.get("myString").unwrap().as_deref(), Some(r#""foo""#));
//!
//! cell.set("bar".to_string());
//! cell.remove();
//! assert!(cell.get().is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cell;
mod options;

pub use cell::PersistentCell;
pub use options::{CellBuilder, CellOptions};
