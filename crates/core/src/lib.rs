//! Core types for stashcell
//!
//! This crate defines the vocabulary shared by every layer of the workspace:
//! - [`Key`]: validated, non-empty identifier of a slot in an external store
//! - [`StoreError`]: failures raised by a key-value backend
//! - [`CodecError`]: failures raised while encoding or decoding a value
//! - [`Error`]: the unified error type, wrapping both of the above

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;

pub use error::{CodecError, Error, Result, StoreError};
pub use key::Key;
