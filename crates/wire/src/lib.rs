//! Wire encoding for stashcell
//!
//! A persistent cell stores its value as a string. This crate provides the
//! [`Codec`] contract for that conversion and the codecs shipped with it:
//!
//! | Codec | Value type | Stored form |
//! |-------|------------|-------------|
//! | [`RawCodec`] | `T: Display + From<String>` | the string itself |
//! | [`JsonCodec`] | `T: Serialize + DeserializeOwned` | JSON text |
//! | [`FnCodec`] | any | caller-supplied serializer/deserializer |
//! | [`PatternCodec`] | [`PatternRecord`] | JSON with `["<<REGEXP", "/src/flags", "REGEXP>>"]` wrappers |
//!
//! ## Round-trip law
//!
//! For every legal value `v`, `decode(encode(v))` is observably equal to `v`.
//! Codecs may be lossy outside their legal domain (JSON drops
//! `#[serde(skip)]` fields, for instance); a cell always mirrors the decoded
//! form, never the raw input.
//!
//! ## Examples
//!
//! ```
//! use stash_wire::{Codec, JsonCodec, RawCodec};
//!
//! let json = JsonCodec;
//! assert_eq!(Codec::<Vec<u8>>::encode(&json, &vec![1, 2]).unwrap(), "[1,2]");
//!
//! let raw = RawCodec;
//! let value: String = raw.decode("not json").unwrap();
//! assert_eq!(value, "not json");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod json;
pub mod pattern;
pub mod raw;

pub use codec::{Codec, FnCodec};
pub use json::JsonCodec;
pub use pattern::{
    Field, Pattern, PatternCodec, PatternRecord, SENTINEL_CLOSE, SENTINEL_OPEN,
};
pub use raw::RawCodec;
