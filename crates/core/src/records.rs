//! Record-level helpers shared by every collection.
//!
//! Records are plain JSON objects so that fields the server does not know
//! about survive a read-modify-write untouched. The helpers here cover the
//! handful of fields the server does reason about: ids, category
//! references, timestamps and 0/1 flags.

use serde_json::Value;

use crate::ids::value_as_id;
use crate::types::{DbId, Record};

/// Query parameters that steer the dispatcher and are never copied onto
/// a record.
pub const RESERVED_PARAMS: &[&str] = &["id", "action"];

/// Fields stored as JSON integers when the submitted text parses as one.
pub const INTEGER_FIELDS: &[&str] = &[
    "category_id",
    "sort_order",
    "view_count",
    "is_published",
    "is_read",
    "is_enabled",
];

/// Display label for content whose category reference does not resolve.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category assigned to a new project when none is submitted.
pub const DEFAULT_PROJECT_CATEGORY: DbId = 1;

/// Status assigned to a new project when none is submitted.
pub const DEFAULT_PROJECT_STATUS: &str = "draft";

/// Convert one query-string value into the JSON value stored for `key`.
pub fn coerce_param(key: &str, raw: &str) -> Value {
    if INTEGER_FIELDS.contains(&key) {
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Value::from(n);
        }
    }
    Value::String(raw.to_string())
}

/// Whether a parameter may be written onto a record.
pub fn is_overlay_param(key: &str) -> bool {
    !RESERVED_PARAMS.contains(&key)
}

/// Copy every non-reserved parameter onto `record`, replacing existing
/// values. Later duplicates of the same key win.
pub fn overlay_params(record: &mut Record, params: &[(String, String)]) {
    for (key, value) in params {
        if is_overlay_param(key) {
            record.insert(key.clone(), coerce_param(key, value));
        }
    }
}

/// Build a new project record from request parameters.
///
/// Known fields get their defaults when absent; any other non-reserved
/// parameter is carried over as-is.
pub fn new_project(id: DbId, params: &[(String, String)], now: &str) -> Record {
    let lookup = |key: &str| {
        params
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let text = |key: &str| Value::String(lookup(key).unwrap_or_default().to_string());

    let mut record = Record::new();
    record.insert("id".into(), Value::from(id));
    record.insert("title".into(), text("title"));
    record.insert(
        "category_id".into(),
        lookup("category_id")
            .map(|raw| coerce_param("category_id", raw))
            .unwrap_or_else(|| Value::from(DEFAULT_PROJECT_CATEGORY)),
    );
    record.insert("category_name".into(), text("category_name"));
    record.insert("content".into(), text("content"));
    record.insert("url".into(), text("url"));
    record.insert("tags".into(), text("tags"));
    record.insert(
        "status".into(),
        Value::String(lookup("status").unwrap_or(DEFAULT_PROJECT_STATUS).to_string()),
    );
    record.insert("created_at".into(), Value::String(now.to_string()));
    record.insert("updated_at".into(), Value::String(now.to_string()));

    for (key, value) in params {
        if is_overlay_param(key) && !record.contains_key(key) {
            record.insert(key.clone(), coerce_param(key, value));
        }
    }
    record
}

/// Stamp `updated_at`.
pub fn touch(record: &mut Record, now: &str) {
    record.insert("updated_at".into(), Value::String(now.to_string()));
}

/// Resolve the display name of the category a record points at.
pub fn category_name<'a>(categories: &'a [Record], record: &Record) -> Option<&'a str> {
    let wanted = record.get("category_id").and_then(value_as_id)?;
    categories
        .iter()
        .find(|c| c.get("id").and_then(value_as_id) == Some(wanted))
        .and_then(|c| c.get("name"))
        .and_then(Value::as_str)
}

/// Write `category_name` onto a record, using `fallback` when the
/// reference dangles.
pub fn denormalize_category(record: &mut Record, categories: &[Record], fallback: &str) {
    let name = category_name(categories, record).unwrap_or(fallback).to_string();
    record.insert("category_name".into(), Value::String(name));
}

/// Shallow merge: every top-level key of `patch` replaces the key in
/// `base`. Nested objects are replaced wholesale, not merged.
pub fn shallow_merge(base: &mut Record, patch: Record) {
    for (key, value) in patch {
        base.insert(key, value);
    }
}

/// Interpret a 0/1 flag field. Booleans are accepted for documents
/// written by older tooling.
pub fn flag(record: &Record, key: &str) -> bool {
    match record.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64().is_some_and(|v| v != 0),
        Some(Value::String(s)) => s == "1" || s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Store a 0/1 flag field.
pub fn set_flag(record: &mut Record, key: &str, on: bool) {
    record.insert(key.to_string(), Value::from(i64::from(on)));
}
