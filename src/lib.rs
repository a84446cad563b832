// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # RDS Client
//!
//! A Rust client for Rich Data Services tabular query APIs.
//!
//! ## Features
//!
//! - **Catalog Discovery**: Server → Catalog → DataProduct hierarchy, validated at construction
//! - **Row Queries**: `select` with filtering, ordering, grouping, and windowing
//! - **Cross-Tabulation**: `tabulate` with dimensions, measures, and grand totals
//! - **Automatic Batching**: wide results are paged so no response exceeds the cell budget
//! - **Metadata Lookups**: variables, classifications, codes, and statistical profiles
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rds_client::{QuerySpec, Result, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let server = Server::new("covid19.richdataservices.com");
//!
//!     let catalog = server.catalog("int").await?;
//!     let product = catalog.data_product("jhu_country").await?;
//!
//!     let results = product
//!         .select(
//!             &QuerySpec::new()
//!                 .cols(["date_stamp", "cnt_confirmed"])
//!                 .filter(["iso3166_1=US"])
//!                 .order_by(["date_stamp"])
//!                 .limit(30),
//!         )
//!         .await?;
//!
//!     for record in &results.records {
//!         println!("{record:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Entity Facades                         │
//! │  Server → Catalog → DataProduct                             │
//! │  count()  select()  tabulate()  variable()  profile() ...   │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──────────────┬───────────────┐
//! │    Query     │            Batch             │   Assemble    │
//! ├──────────────┼──────────────────────────────┼───────────────┤
//! │ QuerySpec    │ column probe                 │ record concat │
//! │ params       │ cell-budget page sizing      │ metadata union│
//! │              │ sequential offset/limit loop │ totals, count │
//! └──────────────┴──────────────────────────────┴───────────────┘
//!                                │
//!                       HTTP transport (GET + JSON, X-API-KEY)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport
pub mod http;

/// Typed query options
pub mod query;

/// Batched page retrieval
pub mod batch;

/// Result assembly
pub mod assemble;

/// Server facade
pub mod server;

/// Catalog facade
pub mod catalog;

/// Data product facade
pub mod product;

// ============================================================================
// Re-exports
// ============================================================================

pub use assemble::ResultSet;
pub use batch::Variable;
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use product::DataProduct;
pub use query::QuerySpec;
pub use server::{Server, ServerConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
