//! Optional list filters for the content collections.
//!
//! The admin screens narrow lists by a free-text search, a category and a
//! read/published status. The server accepts the same three knobs as
//! query parameters: `search`, `category_id`, `status`.

use serde_json::Value;

use crate::error::CoreError;
use crate::ids::{parse_id, value_as_id};
use crate::records::flag;
use crate::types::{DbId, Record};

/// A two-state status filter backed by a 0/1 flag field.
#[derive(Debug, Clone, Copy)]
pub struct StatusSpec {
    pub field: &'static str,
    pub on_label: &'static str,
    pub off_label: &'static str,
}

/// Which fields a collection exposes to filtering.
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub search_fields: &'static [&'static str],
    pub by_category: bool,
    pub status: Option<StatusSpec>,
}

pub const ARTICLE_FILTER: FilterSpec = FilterSpec {
    search_fields: &["title", "content", "author"],
    by_category: true,
    status: Some(StatusSpec {
        field: "is_published",
        on_label: "published",
        off_label: "draft",
    }),
};

pub const PHOTO_FILTER: FilterSpec = FilterSpec {
    search_fields: &["title", "description"],
    by_category: true,
    status: None,
};

pub const MESSAGE_FILTER: FilterSpec = FilterSpec {
    search_fields: &["name", "email", "content"],
    by_category: false,
    status: Some(StatusSpec {
        field: "is_read",
        on_label: "read",
        off_label: "unread",
    }),
};

/// A parsed filter, ready to test records against.
#[derive(Debug, Default)]
pub struct ListFilter {
    search: Option<String>,
    category_id: Option<DbId>,
    status: Option<(&'static str, bool)>,
}

impl ListFilter {
    /// Build a filter from request parameters. Empty values are ignored.
    pub fn from_params(spec: &FilterSpec, params: &[(String, String)]) -> Result<Self, CoreError> {
        let mut filter = Self::default();

        for (key, value) in params {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "search" => filter.search = Some(value.to_lowercase()),
                "category_id" if spec.by_category => filter.category_id = Some(parse_id(value)?),
                "status" => {
                    let Some(status) = spec.status else { continue };
                    let on = if value == status.on_label {
                        true
                    } else if value == status.off_label {
                        false
                    } else {
                        return Err(CoreError::Validation(format!(
                            "status must be '{}' or '{}'",
                            status.on_label, status.off_label
                        )));
                    };
                    filter.status = Some((status.field, on));
                }
                _ => {}
            }
        }

        Ok(filter)
    }

    /// Whether a record passes every active criterion.
    pub fn matches(&self, spec: &FilterSpec, record: &Record) -> bool {
        if let Some(term) = &self.search {
            let hit = spec.search_fields.iter().any(|field| {
                record
                    .get(*field)
                    .and_then(Value::as_str)
                    .is_some_and(|text| text.to_lowercase().contains(term.as_str()))
            });
            if !hit {
                return false;
            }
        }
        if let Some(wanted) = self.category_id {
            if record.get("category_id").and_then(value_as_id) != Some(wanted) {
                return false;
            }
        }
        if let Some((field, on)) = self.status {
            if flag(record, field) != on {
                return false;
            }
        }
        true
    }

    /// Keep only matching records.
    pub fn apply(&self, spec: &FilterSpec, records: Vec<Record>) -> Vec<Record> {
        records
            .into_iter()
            .filter(|r| self.matches(spec, r))
            .collect()
    }
}
