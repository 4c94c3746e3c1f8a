//! JSON adapter between [`CardRecord`] and its transportable text form.
//!
//! Serialization writes raw values only; defaulting is a display/encode
//! concern and never leaks into storage. Deserialization is pure: on any
//! failure the caller's in-memory record is untouched because nothing is
//! committed until `Ok`.

use qeo_core::model::CardRecord;
use serde_json::Value;

use crate::error::{ParseError, StoreError, StoreResult};

/// Where a JSON payload came from.
///
/// File imports are externally supplied and validated more strictly than
/// local-storage round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    LocalStorage,
    FileImport,
}

/// Keys that must carry a non-empty value when importing an externally
/// supplied file.
const REQUIRED_IMPORT_KEYS: [&str; 2] = ["name", "email"];

/// Serializes a record to compact JSON with every documented key present.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn serialize(record: &CardRecord) -> StoreResult<String> {
    serde_json::to_string(record).map_err(StoreError::Serialize)
}

/// Serializes a record to pretty-printed JSON, as used by data exports.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_pretty(record: &CardRecord) -> StoreResult<String> {
    serde_json::to_string_pretty(record).map_err(StoreError::Serialize)
}

/// Parses JSON text into a card record.
///
/// Keys absent from the input are left unset (empty); unknown keys are
/// ignored. With [`LoadSource::FileImport`], the `name` and `email` keys
/// must be present with non-empty values; local-storage loads skip that
/// gate.
///
/// ## Errors
/// Returns [`ParseError`] if the text is not valid JSON, does not decode
/// to an object, or (on the import path) a required key is missing or
/// empty.
pub fn deserialize(text: &str, source: LoadSource) -> Result<CardRecord, ParseError> {
    let value: Value = serde_json::from_str(text)?;

    let Value::Object(map) = &value else {
        return Err(ParseError::NotAnObject(json_type_name(&value)));
    };

    if source == LoadSource::FileImport {
        for key in REQUIRED_IMPORT_KEYS {
            let Some(entry) = map.get(key) else {
                return Err(ParseError::MissingKey(key));
            };
            if entry.as_str().is_none_or(str::is_empty) {
                return Err(ParseError::EmptyKey(key));
            }
        }
    }

    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
