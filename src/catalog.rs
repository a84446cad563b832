//! Catalog facade
//!
//! A named grouping of data products on a server. Construction validates
//! the catalog id against the server and captures its descriptive fields.

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::product::DataProduct;
use crate::types::JsonValue;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct CatalogSummary {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

/// Facade over one catalog on an RDS server
#[derive(Debug, Clone)]
pub struct Catalog {
    client: Arc<HttpClient>,
    catalog_id: String,
    name: String,
    description: Option<String>,
    uri: Option<String>,
}

impl Catalog {
    /// Resolve a catalog id against the server
    ///
    /// Fatal on failure: no partial catalog is ever returned.
    pub(crate) async fn resolve(client: Arc<HttpClient>, catalog_id: String) -> Result<Self> {
        if catalog_id.trim().is_empty() {
            return Err(Error::usage("catalog ID must be specified"));
        }

        let summary: CatalogSummary = client
            .get_json(&format!("/api/catalog/{catalog_id}"))
            .await
            .map_err(|e| Error::resolution("catalog", catalog_id.clone(), e.to_string()))?;

        Ok(Self {
            client,
            catalog_id,
            name: summary.name,
            description: summary.description,
            uri: summary.uri,
        })
    }

    /// The catalog id
    pub fn id(&self) -> &str {
        &self.catalog_id
    }

    /// The catalog's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The catalog's description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The catalog's URI
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Get the catalog's full metadata
    pub async fn metadata(&self) -> Result<JsonValue> {
        self.client
            .get_json(&format!("/api/catalog/{}", self.catalog_id))
            .await
    }

    /// Resolve a data product by id within this catalog
    ///
    /// Round-trips to the server to validate the id; fails with a
    /// resolution error when it does not exist.
    pub async fn data_product(&self, dataproduct_id: impl Into<String>) -> Result<DataProduct> {
        DataProduct::resolve(
            Arc::clone(&self.client),
            self.catalog_id.clone(),
            dataproduct_id.into(),
        )
        .await
    }
}
