//! Pattern-aware JSON codec
//!
//! JSON has no regular-expression type. [`PatternCodec`] stores top-level
//! pattern properties of a record as a tagged three-element array:
//!
//! ```json
//! {"name": "John", "tag": ["<<REGEXP", "/^j.*$/i", "REGEXP>>"]}
//! ```
//!
//! Only the top level of the record is walked, in both directions. A pattern
//! cannot be placed deeper than that ([`Field::Json`] holds plain JSON), and a
//! tagged array nested inside another value decodes as an ordinary array.
//! A plain JSON property that happens to have the tagged shape decodes as a
//! pattern.

mod decode;
mod encode;
mod regexp;

pub use regexp::Pattern;

use crate::codec::Codec;
use stash_core::CodecError;
use std::collections::BTreeMap;

/// First element of a tagged pattern array
pub const SENTINEL_OPEN: &str = "<<REGEXP";

/// Last element of a tagged pattern array
pub const SENTINEL_CLOSE: &str = "REGEXP>>";

/// Top-level property of a [`PatternRecord`]
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Any JSON value
    Json(serde_json::Value),
    /// A pattern, stored with the tagged-array convention
    Pattern(Pattern),
}

impl Field {
    /// The pattern, if this field holds one
    pub fn as_pattern(&self) -> Option<&Pattern> {
        match self {
            Field::Pattern(p) => Some(p),
            Field::Json(_) => None,
        }
    }

    /// The JSON value, if this field holds one
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Field::Json(v) => Some(v),
            Field::Pattern(_) => None,
        }
    }

    /// The string, if this field holds a JSON string
    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(|v| v.as_str())
    }
}

impl From<Pattern> for Field {
    fn from(p: Pattern) -> Self {
        Field::Pattern(p)
    }
}

impl From<serde_json::Value> for Field {
    fn from(v: serde_json::Value) -> Self {
        Field::Json(v)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Json(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Json(serde_json::Value::String(s))
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Json(serde_json::Value::from(n))
    }
}

impl From<bool> for Field {
    fn from(b: bool) -> Self {
        Field::Json(serde_json::Value::Bool(b))
    }
}

/// Object whose top-level properties may be patterns
pub type PatternRecord = BTreeMap<String, Field>;

/// JSON codec for [`PatternRecord`] with tagged pattern properties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternCodec;

impl Codec<PatternRecord> for PatternCodec {
    fn encode(&self, value: &PatternRecord) -> Result<String, CodecError> {
        encode::encode_record(value)
    }

    fn decode(&self, raw: &str) -> Result<PatternRecord, CodecError> {
        decode::decode_record(raw)
    }
}
