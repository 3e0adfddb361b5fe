//! Error taxonomy
//!
//! Failures are split by where they originate:
//!
//! | Type | Origin | Crosses the cell boundary? |
//! |------|--------|----------------------------|
//! | [`Error::InvalidKey`] | empty key at bind/rebind time | yes |
//! | [`StoreError`] | backend read/write/remove | no, absorbed by the cell |
//! | [`CodecError`] | encode/decode of a value | no, absorbed by the cell |
//!
//! A missing backend is not an error at all: it selects a detached cell.

use thiserror::Error;

/// Failure reported by an external key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would exceed the store's capacity
    #[error("quota exceeded writing '{key}': {requested} bytes requested, {available} available")]
    QuotaExceeded {
        /// Key being written
        key: String,
        /// Bytes the write needs
        requested: usize,
        /// Bytes left in the store
        available: usize,
    },

    /// The backend refused the operation (permissions, privacy mode, ...)
    #[error("storage rejected operation: {0}")]
    Rejected(String),

    /// I/O error from a filesystem-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure converting a value to or from its stored string form
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value cannot be represented by the codec
    #[error("encode error: {0}")]
    Encode(String),

    /// The stored string is malformed for the codec
    #[error("decode error: {0}")]
    Decode(String),

    /// A pattern value could not be compiled or parsed
    #[error("invalid pattern '{source_text}': {reason}")]
    Pattern {
        /// Pattern text as written
        source_text: String,
        /// Why it was rejected
        reason: String,
    },
}

/// All stashcell errors
#[derive(Debug, Error)]
pub enum Error {
    /// Key is empty or otherwise unusable
    #[error("invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Reason the key is invalid
        reason: String,
    },

    /// Backend failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Codec failure
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Result type for stashcell operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a configuration error (bad key)
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Error::InvalidKey { .. })
    }

    /// Check if this error came from the backend
    pub fn is_store(&self) -> bool {
        matches!(self, Error::Store(_))
    }

    /// Check if this error came from a codec
    pub fn is_codec(&self) -> bool {
        matches!(self, Error::Codec(_))
    }
}

impl StoreError {
    /// Check if this is a capacity failure
    pub fn is_quota(&self) -> bool {
        matches!(self, StoreError::QuotaExceeded { .. })
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() || e.is_syntax() || e.is_eof() {
            CodecError::Decode(e.to_string())
        } else {
            CodecError::Encode(e.to_string())
        }
    }
}
