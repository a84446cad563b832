//! Batched page retrieval
//!
//! Main query loop: splits a row window into bounded page requests and
//! collects the server's pages in order.
//!
//! # Overview
//!
//! The batch module provides:
//! - `BatchEngine` - Drives sequential page requests over a `Transport`
//! - `RowWindow` - The requested row window (max records + starting offset)
//! - `Page` / `PageInfo` / `Variable` - Wire types for one server response
//!
//! Page size is capped so that a single response never carries more than
//! [`MAX_CELLS_PER_PAGE`] cells (requested rows times realized columns),
//! bounding payload size regardless of table width.

mod types;

pub use types::{Page, PageInfo, RowWindow, Variable};

use crate::error::Result;
use crate::http::Transport;
use crate::query::QuerySpec;
use crate::types::StringMap;
use tracing::debug;

/// Maximum number of cells (requested rows times realized columns) per page
pub const MAX_CELLS_PER_PAGE: u64 = 10_000;

/// Drives sequential page requests until a row window is exhausted
///
/// Pages are strictly sequential: each request's offset depends on the
/// previous request's size, and the loop stops on the server's "no more
/// rows" signal. All state lives in the call, so one engine can serve
/// concurrent queries if its transport is reentrant.
pub struct BatchEngine<'a> {
    transport: &'a dyn Transport,
}

impl<'a> BatchEngine<'a> {
    /// Create a new batch engine over a transport
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Determine the realized column count for a query
    ///
    /// Uses the explicit column list when one is given; otherwise issues a
    /// one-row probe to discover how wide a select-all response is. The
    /// count is capped by the spec's column limit, and a degenerate result
    /// (no columns at all) counts as 1 so page sizing stays well defined.
    pub async fn realized_column_count(&self, url: &str, spec: &QuerySpec) -> Result<u64> {
        let mut count = match spec.cols {
            Some(ref cols) => cols.len() as u64,
            None => self.probe_column_count(url).await?,
        };

        if let Some(collimit) = spec.collimit {
            count = count.min(collimit);
        }

        Ok(count.max(1))
    }

    /// Issue a one-row probe and count the first record's width
    async fn probe_column_count(&self, url: &str) -> Result<u64> {
        let mut params = StringMap::new();
        params.insert("limit".to_string(), "1".to_string());

        let body = self.transport.fetch_json(url, &params).await?;
        let page: Page = serde_json::from_value(body)?;

        let count = page.records.first().map_or(0, |record| record.len() as u64);
        debug!("Column probe returned {count} columns");
        Ok(count)
    }

    /// Retrieve every page of a row window
    ///
    /// One request per iteration, with `limit = min(remaining, page_size)`
    /// and an offset that advances by the requested amount — a page that
    /// comes back short (or empty) with more rows pending never stalls the
    /// loop. Stops when the bounded window is exhausted or the server
    /// reports no more rows, whichever comes first; at least one request is
    /// always issued, so an empty result still yields one page.
    ///
    /// Any transport error aborts the whole call and discards the pages
    /// fetched so far.
    pub async fn fetch_pages(
        &self,
        url: &str,
        base_params: &StringMap,
        window: RowWindow,
        page_size: u64,
    ) -> Result<Vec<Page>> {
        let mut pages = Vec::new();
        let mut offset = window.offset;
        let mut remaining = window.max_records;

        loop {
            let limit = remaining.map_or(page_size, |left| left.min(page_size));

            let mut params = base_params.clone();
            params.insert("offset".to_string(), offset.to_string());
            params.insert("limit".to_string(), limit.to_string());

            let body = self.transport.fetch_json(url, &params).await?;
            let page: Page = serde_json::from_value(body)?;
            let more_rows = page.info.more_rows;

            debug!(
                "Page {}: requested {limit} rows at offset {offset}, got {}",
                pages.len() + 1,
                page.records.len()
            );
            pages.push(page);

            offset += limit;
            if let Some(left) = remaining {
                let left = left - limit;
                if left == 0 {
                    break;
                }
                remaining = Some(left);
            }
            if !more_rows {
                break;
            }
        }

        Ok(pages)
    }
}

/// Compute the row page size for a query
///
/// The caller's own limit is used when it fits the cell budget; otherwise
/// (or when the query is unbounded) the page size is the largest row count
/// whose cell total stays within [`MAX_CELLS_PER_PAGE`], and never below 1.
pub fn capped_page_size(max_records: Option<u64>, column_count: u64) -> u64 {
    let column_count = column_count.max(1);
    let budget = (MAX_CELLS_PER_PAGE / column_count).max(1);

    match max_records {
        Some(limit) if limit.saturating_mul(column_count) <= MAX_CELLS_PER_PAGE => limit.max(1),
        _ => budget,
    }
}
