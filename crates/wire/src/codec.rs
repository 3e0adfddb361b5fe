//! The codec contract

use stash_core::CodecError;
use std::fmt;
use std::sync::Arc;

/// Converts values of type `T` to and from their stored string form
///
/// Both directions must be pure: the same input always yields the same
/// output, and neither touches the store.
pub trait Codec<T> {
    /// Serialize `value` for storage
    fn encode(&self, value: &T) -> Result<String, CodecError>;

    /// Parse a stored string back into a value
    fn decode(&self, raw: &str) -> Result<T, CodecError>;
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for Box<C> {
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        (**self).encode(value)
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        (**self).decode(raw)
    }
}

impl<T, C: Codec<T> + ?Sized> Codec<T> for Arc<C> {
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        (**self).encode(value)
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        (**self).decode(raw)
    }
}

/// Codec built from a serializer/deserializer closure pair
///
/// # Example
///
/// ```
/// use stash_core::CodecError;
/// use stash_wire::{Codec, FnCodec};
///
/// let upper = FnCodec::new(
///     |v: &String| Ok(v.to_uppercase()),
///     |raw: &str| Ok::<_, CodecError>(raw.to_lowercase()),
/// );
/// assert_eq!(upper.encode(&"abc".to_string()).unwrap(), "ABC");
/// assert_eq!(upper.decode("ABC").unwrap(), "abc");
/// ```
pub struct FnCodec<E, D> {
    serializer: E,
    deserializer: D,
}

impl<E, D> FnCodec<E, D> {
    /// Pair a serializer with a deserializer
    pub fn new(serializer: E, deserializer: D) -> Self {
        Self {
            serializer,
            deserializer,
        }
    }
}

impl<T, E, D> Codec<T> for FnCodec<E, D>
where
    E: Fn(&T) -> Result<String, CodecError>,
    D: Fn(&str) -> Result<T, CodecError>,
{
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        (self.serializer)(value)
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        (self.deserializer)(raw)
    }
}

impl<E, D> fmt::Debug for FnCodec<E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCodec").finish_non_exhaustive()
    }
}
