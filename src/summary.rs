//! Serializable pagination summary
//!
//! `PageSummary` is the public, logic-free snapshot of a [`Paginator`]. It
//! carries the derived page numbers plus an optional payload slice and maps
//! onto a fixed JSON wire shape for API responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::PaginationError;
use crate::paginator::Paginator;

/// Flat snapshot of a paginator, ready for an API response.
///
/// The JSON field names are a wire contract shared with existing consumers
/// and must not change:
///
/// ```json
/// {
///   "per_page": 25,
///   "total_entries": 28,
///   "page": 2,
///   "offset": 25,
///   "next_page": 2,
///   "previous_page": 1,
///   "total_pages": 2,
///   "data": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageSummary<T> {
    /// Page size
    pub per_page: u32,
    /// Total number of items across all pages
    #[serde(rename = "total_entries")]
    pub total_items: u64,
    /// Current page (1-based)
    #[serde(rename = "page")]
    pub current_page: u32,
    /// Zero-based index of the first item on the current page
    pub offset: u64,
    /// Next page number, equal to `page` when on the last page
    pub next_page: u32,
    /// Previous page number, equal to 1 when on the first page
    pub previous_page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// The page of results itself, empty unless attached by the caller
    pub data: Vec<T>,
}

impl Paginator {
    /// Snapshot with a dynamically-typed payload.
    ///
    /// Counterpart of [`to_summary_with_data`] for callers holding untyped
    /// JSON rather than a concrete element type. The payload must be a JSON
    /// array; anything else is a programming error at the call site and is
    /// surfaced as [`PaginationError::NonSequenceData`].
    ///
    /// [`to_summary_with_data`]: Self::to_summary_with_data
    pub fn to_summary_with_value(
        &self,
        value: Value,
    ) -> Result<PageSummary<Value>, PaginationError> {
        match value {
            Value::Array(items) => Ok(self.to_summary_with_data(items)),
            other => Err(PaginationError::NonSequenceData {
                kind: json_kind(&other),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
