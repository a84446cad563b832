//! Typed query options and parameter serialization

use crate::error::{Error, Result};
use crate::types::StringMap;

/// Description of one logical query against a data product
///
/// Every recognized option of the select and tabulate endpoints, with
/// chainable setters. Unset options are never serialized, so the server's
/// own defaults apply.
///
/// `limit` and `offset` describe the row window of the whole query; the
/// batching engine owns how that window is split into page requests, so
/// they are not part of [`QuerySpec::to_params`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    /// Columns to return (select); unset queries all columns
    pub cols: Option<Vec<String>>,
    /// Dimensions of a tabulation
    pub dims: Option<Vec<String>>,
    /// Measures of a tabulation; unset defaults to a server-side count
    pub measure: Option<Vec<String>>,
    /// Filter expressions, serialized as the `where` parameter
    pub filters: Option<Vec<String>>,
    /// Columns to order the records by
    pub orderby: Option<Vec<String>>,
    /// Columns to group the records by
    pub groupby: Option<Vec<String>>,
    /// Limit on returned columns; must be at least 1 when set
    pub collimit: Option<u64>,
    /// Offset into the returned columns
    pub coloffset: Option<u64>,
    /// Columns to weigh by
    pub weights: Option<Vec<String>>,
    /// Wire format hint for the response payload
    pub format: Option<String>,
    /// Return variable metadata with the records
    pub metadata: Option<bool>,
    /// Substitute code labels for raw coded values
    pub inject: Option<bool>,
    /// Return the result-set row count
    pub count: Option<bool>,
    /// Return grand-total rows (tabulate)
    pub totals: Option<bool>,
    /// Maximum rows to retrieve; unset retrieves all matching rows
    pub limit: Option<u64>,
    /// Starting row offset
    pub offset: Option<u64>,
}

impl QuerySpec {
    /// Create an empty query spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the columns to select
    #[must_use]
    pub fn cols<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cols = Some(cols.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tabulation dimensions
    #[must_use]
    pub fn dims<I, S>(mut self, dims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dims = Some(dims.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tabulation measures
    #[must_use]
    pub fn measure<I, S>(mut self, measure: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.measure = Some(measure.into_iter().map(Into::into).collect());
        self
    }

    /// Set the filter expressions
    #[must_use]
    pub fn filter<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters = Some(filters.into_iter().map(Into::into).collect());
        self
    }

    /// Set the ordering columns
    #[must_use]
    pub fn order_by<I, S>(mut self, orderby: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby = Some(orderby.into_iter().map(Into::into).collect());
        self
    }

    /// Set the grouping columns
    #[must_use]
    pub fn group_by<I, S>(mut self, groupby: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groupby = Some(groupby.into_iter().map(Into::into).collect());
        self
    }

    /// Set the column limit
    #[must_use]
    pub fn col_limit(mut self, collimit: u64) -> Self {
        self.collimit = Some(collimit);
        self
    }

    /// Set the column offset
    #[must_use]
    pub fn col_offset(mut self, coloffset: u64) -> Self {
        self.coloffset = Some(coloffset);
        self
    }

    /// Set the weight columns
    #[must_use]
    pub fn weights<I, S>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weights = Some(weights.into_iter().map(Into::into).collect());
        self
    }

    /// Set the response format hint
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set whether variable metadata is returned
    #[must_use]
    pub fn metadata(mut self, metadata: bool) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set whether code labels replace raw coded values
    #[must_use]
    pub fn inject(mut self, inject: bool) -> Self {
        self.inject = Some(inject);
        self
    }

    /// Set whether the result-set row count is returned
    #[must_use]
    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    /// Set whether grand-total rows are returned
    #[must_use]
    pub fn totals(mut self, totals: bool) -> Self {
        self.totals = Some(totals);
        self
    }

    /// Set the row limit
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the row offset
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Whether the caller expects metadata in the assembled result
    ///
    /// The server returns metadata unless told otherwise, so only an
    /// explicit `metadata(false)` turns it off.
    pub fn wants_metadata(&self) -> bool {
        self.metadata != Some(false)
    }

    /// Whether the caller expects the row count in the assembled result
    pub fn wants_count(&self) -> bool {
        self.count == Some(true)
    }

    /// Validate the spec before issuing any request
    pub fn validate(&self) -> Result<()> {
        if self.collimit == Some(0) {
            return Err(Error::usage("column limit must be at least 1"));
        }
        Ok(())
    }

    /// Serialize the set options into query-string parameters
    ///
    /// Pure function of the spec: list values are comma-joined in input
    /// order, empty or unset options are omitted entirely, booleans are
    /// lowercase and only present when explicitly set, and numeric options
    /// are decimal integers. The row window (`limit`/`offset`) is excluded;
    /// the batching engine serializes it per page.
    pub fn to_params(&self) -> StringMap {
        let mut params = StringMap::new();

        insert_list(&mut params, "cols", self.cols.as_deref());
        insert_list(&mut params, "dims", self.dims.as_deref());
        insert_list(&mut params, "measure", self.measure.as_deref());
        insert_list(&mut params, "where", self.filters.as_deref());
        insert_list(&mut params, "orderby", self.orderby.as_deref());
        insert_list(&mut params, "groupby", self.groupby.as_deref());
        insert_list(&mut params, "weights", self.weights.as_deref());

        insert_number(&mut params, "collimit", self.collimit);
        insert_number(&mut params, "coloffset", self.coloffset);

        if let Some(ref format) = self.format {
            if !format.is_empty() {
                params.insert("format".to_string(), format.clone());
            }
        }

        insert_flag(&mut params, "metadata", self.metadata);
        insert_flag(&mut params, "inject", self.inject);
        insert_flag(&mut params, "count", self.count);
        insert_flag(&mut params, "totals", self.totals);

        params
    }
}

fn insert_list(params: &mut StringMap, name: &str, values: Option<&[String]>) {
    if let Some(values) = values {
        if !values.is_empty() {
            params.insert(name.to_string(), values.join(","));
        }
    }
}

fn insert_number(params: &mut StringMap, name: &str, value: Option<u64>) {
    if let Some(value) = value {
        params.insert(name.to_string(), value.to_string());
    }
}

fn insert_flag(params: &mut StringMap, name: &str, value: Option<bool>) {
    if let Some(value) = value {
        params.insert(name.to_string(), value.to_string());
    }
}
