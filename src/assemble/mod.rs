//! Result assembly
//!
//! Merges the ordered pages of one query into a single `ResultSet` with
//! consistent column metadata, optional totals, and an optional row count.
//!
//! # Overview
//!
//! Variable metadata is query-invariant across the pages of one query, so
//! the union keeps the first occurrence of every display key and ignores
//! later repeats. Column order follows that union; records and totals are
//! plain concatenations in page order.

use crate::batch::{Page, Variable};
use crate::types::Record;

/// Assembly options derived from the original query
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Whether metadata (and metadata-derived columns) are wanted
    pub with_metadata: bool,
    /// Whether the result-set row count is wanted
    pub with_count: bool,
    /// Column identifiers to fall back on when metadata is not wanted
    pub fallback_columns: Vec<String>,
}

/// The assembled output of one query
///
/// Created once per query call and owned solely by the caller. Whenever
/// metadata was requested, `columns` and `metadata` are parallel and every
/// record holds exactly `columns.len()` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// All records, in page order and within-page order
    pub records: Vec<Record>,
    /// Ordered column identifiers
    pub columns: Vec<String>,
    /// Per-column metadata, parallel to `columns`; empty when not requested
    pub metadata: Vec<Variable>,
    /// Grand-total rows; absent when no page contributed any
    pub totals: Option<Vec<Record>>,
    /// Result-set row count; present only when requested
    pub count: Option<u64>,
}

impl ResultSet {
    /// Number of assembled records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the result set holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Merge the ordered pages of one query into a `ResultSet`
pub fn assemble(pages: Vec<Page>, options: &AssembleOptions) -> ResultSet {
    let count = options
        .with_count
        .then(|| pages.first().map_or(0, |page| page.info.row_count));

    let metadata = if options.with_metadata {
        union_variables(&pages)
    } else {
        Vec::new()
    };

    let columns = if options.with_metadata {
        metadata
            .iter()
            .map(|variable| variable.display_key().to_string())
            .collect()
    } else {
        options.fallback_columns.clone()
    };

    let mut records = Vec::new();
    let mut totals: Option<Vec<Record>> = None;

    for page in pages {
        records.extend(page.records);

        if let Some(page_totals) = page.totals {
            if !page_totals.is_empty() {
                totals.get_or_insert_with(Vec::new).extend(page_totals);
            }
        }
    }

    ResultSet {
        records,
        columns,
        metadata,
        totals,
        count,
    }
}

/// First-seen-wins union of variable metadata across pages
///
/// Keyed by display label, falling back to the internal name; insertion
/// order is preserved and later occurrences never overwrite earlier ones.
fn union_variables(pages: &[Page]) -> Vec<Variable> {
    let mut seen = std::collections::HashSet::new();
    let mut union = Vec::new();

    for page in pages {
        for variable in &page.variables {
            if seen.insert(variable.display_key().to_string()) {
                union.push(variable.clone());
            }
        }
    }

    union
}
