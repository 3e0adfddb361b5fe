//! Storage backends for stashcell
//!
//! This crate defines the synchronous key-value surface a persistent cell
//! mirrors into, and a few implementations of it:
//! - [`ExternalStore`]: the three-operation backend contract
//! - [`Backend`]: presence flag, consulted once when a cell is bound
//! - [`MemoryStore`]: shared in-process map with an optional byte quota
//! - [`FileStore`]: one file per key, survives process restarts
//! - `WebStorage`: browser `localStorage` (wasm32 with the `web` feature)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod file;
pub mod memory;
pub mod traits;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub mod web;

pub use backend::Backend;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::ExternalStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStorage;
