use chrono::{DateTime, NaiveDateTime, Utc};

/// Record identifiers. Stored ids may be JSON numbers or numeric strings;
/// both normalise to this type (see [`crate::ids`]).
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = DateTime<Utc>;

/// A single JSON record (one element of a collection, or the profile).
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Canonical on-disk timestamp layout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp in the canonical `YYYY-MM-DD HH:mm:ss` layout.
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// The current time in the canonical layout.
pub fn now_string() -> String {
    format_timestamp(Utc::now())
}

/// Parse a stored timestamp.
///
/// Older documents carry RFC 3339 strings (`2024-05-01T10:00:00.000Z`),
/// newer ones the canonical layout. Both are accepted; anything else
/// yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}
