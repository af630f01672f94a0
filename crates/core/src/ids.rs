//! Identifier normalisation.
//!
//! Ids arrive as query-string text and are stored either as JSON numbers
//! or as numeric strings. Everything is converted to [`DbId`] once, here,
//! and compared as integers afterwards.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::{DbId, Record};

/// Parse an id supplied by a client.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("id must not be empty".into()));
    }
    trimmed
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("id '{trimmed}' is not a valid integer")))
}

/// Read an id out of a stored JSON value.
///
/// Accepts integers, integral floats and numeric strings. Returns `None`
/// for anything else.
pub fn value_as_id(value: &Value) -> Option<DbId> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as DbId)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// The `id` field of a record, if present and numeric.
pub fn record_id(record: &Record) -> Option<DbId> {
    record.get("id").and_then(value_as_id)
}

/// Index of the record with the given id.
pub fn position_of(records: &[Record], id: DbId) -> Option<usize> {
    records.iter().position(|r| record_id(r) == Some(id))
}

/// The id to assign to a newly appended record: one past the largest
/// numeric id. Records without a numeric id are ignored; an empty
/// collection starts at 1. Fails once the largest id is `DbId::MAX`.
pub fn next_id(records: &[Record]) -> Result<DbId, CoreError> {
    match records.iter().filter_map(record_id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal(format!("no id left after {max}"))),
    }
}
