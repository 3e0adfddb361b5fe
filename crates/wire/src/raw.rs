//! Raw codec: strings pass through untouched

use crate::codec::Codec;
use stash_core::CodecError;
use std::fmt;

/// Stores the value's string form and reads it back verbatim
///
/// Encoding a `String` is the identity; any other `Display` type is coerced
/// with `to_string`. Decoding never parses: the stored string is handed to
/// `T::from`. Decoding therefore cannot fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCodec;

impl<T> Codec<T> for RawCodec
where
    T: fmt::Display + From<String>,
{
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        Ok(value.to_string())
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        Ok(T::from(raw.to_string()))
    }
}
