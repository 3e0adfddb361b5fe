//! Record encoding

use super::{Field, PatternRecord, SENTINEL_CLOSE, SENTINEL_OPEN};
use serde_json::{Map, Value};
use stash_core::CodecError;

/// Encode a record, wrapping top-level patterns in sentinel arrays
pub(super) fn encode_record(record: &PatternRecord) -> Result<String, CodecError> {
    let mut object = Map::with_capacity(record.len());
    for (key, field) in record {
        let value = match field {
            Field::Json(v) => v.clone(),
            Field::Pattern(p) => wrap_pattern(&p.to_string()),
        };
        object.insert(key.clone(), value);
    }
    serde_json::to_string(&Value::Object(object)).map_err(|e| CodecError::Encode(e.to_string()))
}

fn wrap_pattern(literal: &str) -> Value {
    Value::Array(vec![
        Value::String(SENTINEL_OPEN.to_string()),
        Value::String(literal.to_string()),
        Value::String(SENTINEL_CLOSE.to_string()),
    ])
}
