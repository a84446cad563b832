//! Query specification module
//!
//! Defines `QuerySpec`, the typed description of one logical query, and its
//! serialization into RDS query-string parameters.
//!
//! # Overview
//!
//! A `QuerySpec` enumerates every option the select and tabulate endpoints
//! recognize. Options left unset are omitted from the query string so the
//! server-side defaults apply.

mod spec;

pub use spec::QuerySpec;

#[cfg(test)]
mod tests;
