//! Wire types for paginated query responses

use crate::types::{JsonObject, Record};
use serde::{Deserialize, Serialize};

/// The row window of one logical query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowWindow {
    /// Maximum rows to retrieve; `None` retrieves all matching rows
    pub max_records: Option<u64>,
    /// Starting row offset
    pub offset: u64,
}

impl RowWindow {
    /// Create a new row window
    pub fn new(max_records: Option<u64>, offset: u64) -> Self {
        Self {
            max_records,
            offset,
        }
    }
}

/// One bounded server response within a paginated retrieval
///
/// Produced by the transport, consumed once by the batch engine, and
/// discarded after assembly.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Page {
    /// Records of this page, each positionally aligned to the columns
    #[serde(default)]
    pub records: Vec<Record>,
    /// Variable metadata for the returned columns
    #[serde(default)]
    pub variables: Vec<Variable>,
    /// Grand-total rows, when requested and available
    #[serde(default)]
    pub totals: Option<Vec<Record>>,
    /// Pagination bookkeeping for this page
    pub info: PageInfo,
}

/// Pagination bookkeeping attached to every query response
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Row count of the result set as computed by the server
    #[serde(default)]
    pub row_count: u64,
    /// Whether more rows follow beyond this page
    #[serde(default)]
    pub more_rows: bool,
}

/// Metadata describing one variable (column) of a result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variable {
    /// Internal variable name
    pub name: String,
    /// Human-readable display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Remaining metadata fields, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Variable {
    /// The key this variable is displayed and deduplicated under
    ///
    /// The display label when one is present, the internal name otherwise.
    pub fn display_key(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
