//! Data product facade
//!
//! A named tabular dataset within a catalog. Construction validates the
//! data-product id; the facade then exposes the query operations and the
//! single-shot metadata lookups.
//!
//! All query state is local to each call, so one `DataProduct` can serve
//! concurrent queries.

use crate::assemble::{assemble, AssembleOptions, ResultSet};
use crate::batch::{capped_page_size, BatchEngine, Page, RowWindow};
use crate::error::{Error, Result};
use crate::http::{HttpClient, Transport};
use crate::query::QuerySpec;
use crate::types::JsonValue;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Default number of codes returned by a classification code lookup
pub const DEFAULT_CODE_LIMIT: u64 = 20;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductSummary {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    last_update: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

/// Facade over one data product in a catalog
#[derive(Debug, Clone)]
pub struct DataProduct {
    client: Arc<HttpClient>,
    catalog_id: String,
    dataproduct_id: String,
    name: String,
    description: Option<String>,
    last_update: Option<String>,
    uri: Option<String>,
}

impl DataProduct {
    /// Resolve a data-product id against its catalog
    ///
    /// Fatal on failure: no partial data product is ever returned.
    pub(crate) async fn resolve(
        client: Arc<HttpClient>,
        catalog_id: String,
        dataproduct_id: String,
    ) -> Result<Self> {
        if catalog_id.trim().is_empty() {
            return Err(Error::usage("catalog ID must be specified"));
        }
        if dataproduct_id.trim().is_empty() {
            return Err(Error::usage("data product ID must be specified"));
        }

        let summary: ProductSummary = client
            .get_json(&format!("/api/catalog/{catalog_id}/{dataproduct_id}"))
            .await
            .map_err(|e| {
                Error::resolution("data product", dataproduct_id.clone(), e.to_string())
            })?;

        Ok(Self {
            client,
            catalog_id,
            dataproduct_id,
            name: summary.name,
            description: summary.description,
            last_update: summary.last_update,
            uri: summary.uri,
        })
    }

    /// The data-product id
    pub fn id(&self) -> &str {
        &self.dataproduct_id
    }

    /// The id of the owning catalog
    pub fn catalog_id(&self) -> &str {
        &self.catalog_id
    }

    /// The data product's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The data product's description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// When the data product was last updated
    pub fn last_update(&self) -> Option<&str> {
        self.last_update.as_deref()
    }

    /// The data product's URI
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    fn query_path(&self, operation: &str) -> String {
        format!(
            "/api/query/{}/{}/{operation}",
            self.catalog_id, self.dataproduct_id
        )
    }

    fn catalog_path(&self) -> String {
        format!("/api/catalog/{}/{}", self.catalog_id, self.dataproduct_id)
    }

    // ============================================================================
    // Query Operations
    // ============================================================================

    /// Get the record count of the data product
    pub async fn count(&self) -> Result<u64> {
        let value: JsonValue = self.client.get_json(&self.query_path("count")).await?;
        value
            .as_u64()
            .ok_or_else(|| Error::decode(format!("count endpoint returned {value}")))
    }

    /// Query the data product for a set of records
    ///
    /// Retrieves the spec's row window in bounded pages and assembles them
    /// into one result set. The page size is capped so that no single
    /// response exceeds the cell budget, probing the table width first when
    /// the spec does not name its columns.
    pub async fn select(&self, spec: &QuerySpec) -> Result<ResultSet> {
        spec.validate()?;

        let url = self.query_path("select");
        let params = spec.to_params();
        let engine = BatchEngine::new(self.client.as_ref());

        let column_count = engine.realized_column_count(&url, spec).await?;
        let page_size = capped_page_size(spec.limit, column_count);
        debug!(
            "Selecting from {}/{} with page size {page_size} ({column_count} columns)",
            self.catalog_id, self.dataproduct_id
        );

        let window = RowWindow::new(spec.limit, spec.offset.unwrap_or(0));
        let pages = engine.fetch_pages(&url, &params, window, page_size).await?;

        let options = AssembleOptions {
            with_metadata: spec.wants_metadata(),
            with_count: spec.wants_count(),
            fallback_columns: spec.cols.clone().unwrap_or_default(),
        };
        Ok(assemble(pages, &options))
    }

    /// Query the data product for a cross-tabulation
    ///
    /// A tabulation is bounded by its dimension cardinality rather than the
    /// table's row count, so it is issued as a single request and assembled
    /// through the same path as a select.
    pub async fn tabulate(&self, spec: &QuerySpec) -> Result<ResultSet> {
        spec.validate()?;

        let url = self.query_path("tabulate");
        let params = spec.to_params();

        let body = self.client.fetch_json(&url, &params).await?;
        let page: Page = serde_json::from_value(body)?;

        let mut fallback_columns = spec.dims.clone().unwrap_or_default();
        fallback_columns.extend(spec.measure.clone().unwrap_or_default());

        let options = AssembleOptions {
            with_metadata: spec.wants_metadata(),
            with_count: spec.wants_count(),
            fallback_columns,
        };
        Ok(assemble(vec![page], &options))
    }

    // ============================================================================
    // Metadata Lookups
    // ============================================================================

    /// Get the metadata for one variable, or for all variables
    pub async fn variable(&self, variable: Option<&str>) -> Result<JsonValue> {
        let path = match variable {
            Some(name) => format!("{}/variable/{name}", self.catalog_path()),
            None => format!("{}/variables", self.catalog_path()),
        };
        self.client.get_json(&path).await
    }

    /// Get the metadata for one classification, or for all classifications
    pub async fn classification(&self, classification: Option<&str>) -> Result<JsonValue> {
        let path = match classification {
            Some(name) => format!("{}/classification/{name}", self.catalog_path()),
            None => format!("{}/classifications", self.catalog_path()),
        };
        self.client.get_json(&path).await
    }

    /// Get the code metadata of a classification
    ///
    /// Returns at most `limit` codes, defaulting to [`DEFAULT_CODE_LIMIT`].
    pub async fn codes(&self, classification: &str, limit: Option<u64>) -> Result<JsonValue> {
        if classification.trim().is_empty() {
            return Err(Error::usage("classification name must be specified"));
        }

        let path = format!("{}/classification/{classification}/codes", self.catalog_path());
        let limit = limit.unwrap_or(DEFAULT_CODE_LIMIT);

        let mut params = crate::types::StringMap::new();
        params.insert("limit".to_string(), limit.to_string());
        self.client.fetch_json(&path, &params).await
    }

    /// Get the statistical profile of a variable
    pub async fn profile(&self, variable: &str) -> Result<JsonValue> {
        if variable.trim().is_empty() {
            return Err(Error::usage("variable name must be specified"));
        }

        let path = format!("{}/variables/profile", self.catalog_path());
        let mut params = crate::types::StringMap::new();
        params.insert("cols".to_string(), variable.to_string());

        self.client.fetch_json(&path, &params).await
    }

    /// Get the metadata for the data product
    pub async fn metadata(&self) -> Result<JsonValue> {
        self.client.get_json(&self.catalog_path()).await
    }
}
