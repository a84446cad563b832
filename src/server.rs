//! Server facade
//!
//! Entry point into an RDS deployment: resolves the API base URL from its
//! parts and exposes the server-level lookups plus catalog access.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::JsonValue;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for connecting to an RDS server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server domain name, or a full base URL
    pub domain: String,
    /// Network protocol, used when the domain carries no scheme
    pub protocol: String,
    /// RDS mount path on the server
    pub path: String,
    /// Port, appended when the domain does not already carry it
    pub port: Option<u16>,
    /// API key credential forwarded on every request
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl ServerConfig {
    /// Create a config for a domain with the standard defaults
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            protocol: "https".to_string(),
            path: "/rds".to_string(),
            port: None,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Resolve the API base URL from the configured parts
    ///
    /// A domain that already carries a scheme, port, or path keeps them;
    /// missing parts are filled in from the config. This lets callers pass
    /// either a bare domain or a complete base URL.
    pub fn base_url(&self) -> String {
        let mut api = self.domain.clone();

        if !api.contains("http") {
            api = format!("{}://{api}", self.protocol);
        }

        if let Some(port) = self.port {
            let suffix = format!(":{port}");
            if !api.contains(&suffix) {
                api.push_str(&suffix);
            }
        }

        if !api.contains(&self.path) {
            api.push_str(&self.path);
        }

        api
    }
}

/// Builder for a [`Server`]
pub struct ServerBuilder {
    config: ServerConfig,
}

impl ServerBuilder {
    /// Set the network protocol
    #[must_use]
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.config.protocol = protocol.into();
        self
    }

    /// Set the RDS mount path
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the port
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = Some(port);
        self
    }

    /// Set the API key credential
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the server facade
    pub fn build(self) -> Server {
        Server::with_config(self.config)
    }
}

/// Facade over one RDS server
///
/// Holds the resolved base URL and the shared HTTP client; all catalogs
/// and data products obtained through it reuse the same client.
#[derive(Debug, Clone)]
pub struct Server {
    client: Arc<HttpClient>,
    base_url: String,
}

impl Server {
    /// Create a server facade for a domain with the standard defaults
    pub fn new(domain: impl Into<String>) -> Self {
        Self::with_config(ServerConfig::new(domain))
    }

    /// Start building a server facade for a domain
    pub fn builder(domain: impl Into<String>) -> ServerBuilder {
        ServerBuilder {
            config: ServerConfig::new(domain),
        }
    }

    /// Create a server facade from a full config
    pub fn with_config(config: ServerConfig) -> Self {
        let base_url = config.base_url();

        let mut http_config = HttpClientConfig::builder()
            .base_url(base_url.clone())
            .timeout(config.timeout);
        if let Some(key) = config.api_key.clone() {
            http_config = http_config.api_key(key);
        }

        Self {
            client: Arc::new(HttpClient::with_config(http_config.build())),
            base_url,
        }
    }

    /// The resolved API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The shared HTTP client
    pub(crate) fn client(&self) -> Arc<HttpClient> {
        Arc::clone(&self.client)
    }

    /// Get the root catalog listing every catalog and data product
    pub async fn root_catalog(&self) -> Result<JsonValue> {
        self.client.get_json("/api/catalog").await
    }

    /// Get information about the server
    pub async fn server_info(&self) -> Result<JsonValue> {
        self.client.get_json("/api/server/info").await
    }

    /// Get the changelog of additions, removals, and fixes
    pub async fn changelog(&self) -> Result<JsonValue> {
        self.client.get_json("/api/server/changelog").await
    }

    /// Resolve a catalog by id
    ///
    /// Round-trips to the server to validate the id; fails with a
    /// resolution error when it does not exist.
    pub async fn catalog(&self, catalog_id: impl Into<String>) -> Result<Catalog> {
        Catalog::resolve(self.client(), catalog_id.into()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_bare_domain() {
        let config = ServerConfig::new("covid19.richdataservices.com");
        assert_eq!(
            config.base_url(),
            "https://covid19.richdataservices.com/rds"
        );
    }

    #[test]
    fn test_base_url_keeps_full_url() {
        let config = ServerConfig::new("https://covid19.richdataservices.com/rds");
        assert_eq!(
            config.base_url(),
            "https://covid19.richdataservices.com/rds"
        );
    }

    #[test]
    fn test_base_url_with_port_and_path() {
        let server = Server::builder("localhost")
            .protocol("http")
            .port(8080)
            .path("/rds")
            .build();
        assert_eq!(server.base_url(), "http://localhost:8080/rds");
    }

    #[test]
    fn test_base_url_custom_path() {
        let server = Server::builder("data.example.org").path("/api/rds").build();
        assert_eq!(server.base_url(), "https://data.example.org/api/rds");
    }

    #[test]
    fn test_new_uses_defaults() {
        let server = Server::new("covid19.richdataservices.com");
        assert_eq!(
            server.base_url(),
            "https://covid19.richdataservices.com/rds"
        );
    }

    #[test]
    fn test_builder_defaults() {
        let config = ServerConfig::new("example.com");
        assert_eq!(config.protocol, "https");
        assert_eq!(config.path, "/rds");
        assert!(config.port.is_none());
        assert!(config.api_key.is_none());
    }
}
