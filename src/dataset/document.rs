//! The intermediate JSON document bridging collection and transformation.
//!
//! On disk it is a single object mapping player id (decimal string) to a
//! [`PlayerRecord`], in collection order. Reading keeps entries untyped so a
//! bad record can be rejected on its own by [`validate_entry`] instead of
//! failing the whole document.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

use super::record::PlayerRecord;
use crate::{
    core::{read_to_string, write_atomic},
    NhlError, Result,
};

/// Document entries in file order.
pub type RawDocument = Map<String, Value>;

/// Key records by player id, keeping their order.
pub fn to_document(records: &[PlayerRecord]) -> Result<RawDocument> {
    let mut doc = RawDocument::new();
    for record in records {
        doc.insert(record.player_id.to_string(), serde_json::to_value(record)?);
    }
    Ok(doc)
}

/// Parse document text. Anything other than a top-level JSON object is fatal.
pub fn parse_document(contents: &str) -> Result<RawDocument> {
    match serde_json::from_str::<Value>(contents)? {
        Value::Object(map) => Ok(map),
        other => Err(NhlError::MalformedDocument {
            reason: format!("expected a JSON object at the top level, found {}", kind(&other)),
        }),
    }
}

pub fn read_document(path: &Path) -> Result<RawDocument> {
    parse_document(&read_to_string(path)?)
}

pub fn write_document(path: &Path, doc: &RawDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    write_atomic(path, json.as_bytes())?;
    Ok(())
}

/// Validate one document entry into a typed record.
///
/// Fails with [`NhlError::InvalidRecord`] when a required field is missing or
/// mistyped, or when the record's `playerId` disagrees with its key.
pub fn validate_entry(key: &str, value: &Value) -> Result<PlayerRecord> {
    let record = PlayerRecord::deserialize(value).map_err(|e| NhlError::InvalidRecord {
        player: key.to_string(),
        reason: e.to_string(),
    })?;

    if record.player_id.to_string() != key {
        return Err(NhlError::InvalidRecord {
            player: key.to_string(),
            reason: format!("playerId {} does not match its key", record.player_id),
        });
    }

    Ok(record)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
