//! Default structural codec (JSON)

use crate::codec::Codec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use stash_core::CodecError;

/// JSON via `serde_json`
///
/// This is the codec a cell uses when no other is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl<T> Codec<T> for JsonCodec
where
    T: Serialize + DeserializeOwned,
{
    fn encode(&self, value: &T) -> Result<String, CodecError> {
        serde_json::to_string(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, raw: &str) -> Result<T, CodecError> {
        serde_json::from_str(raw).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
