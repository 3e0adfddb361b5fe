//! Record decoding

use super::{Field, Pattern, PatternRecord, SENTINEL_CLOSE, SENTINEL_OPEN};
use serde_json::Value;
use stash_core::CodecError;

/// Decode a record, rebuilding patterns from top-level sentinel arrays
pub(super) fn decode_record(raw: &str) -> Result<PatternRecord, CodecError> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| CodecError::Decode(e.to_string()))?;
    let object = match parsed {
        Value::Object(object) => object,
        other => {
            return Err(CodecError::Decode(format!(
                "expected a JSON object at top level, got {}",
                kind(&other)
            )))
        }
    };

    let mut record = PatternRecord::new();
    for (key, value) in object {
        let field = if is_tagged(&value) {
            Field::Pattern(unwrap_pattern(&value)?)
        } else {
            Field::Json(value)
        };
        record.insert(key, field);
    }
    Ok(record)
}

/// Check for the `[SENTINEL_OPEN, _, SENTINEL_CLOSE]` shape
fn is_tagged(value: &Value) -> bool {
    match value.as_array() {
        Some(items) => {
            items.len() == 3 && items[0] == SENTINEL_OPEN && items[2] == SENTINEL_CLOSE
        }
        None => false,
    }
}

/// Rebuild the pattern held by a tagged array
fn unwrap_pattern(value: &Value) -> Result<Pattern, CodecError> {
    let literal = &value[1];
    match literal.as_str() {
        Some(text) => Pattern::parse_literal(text),
        None => Err(CodecError::Decode(format!(
            "pattern wrapper holds {} instead of a string",
            kind(literal)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
