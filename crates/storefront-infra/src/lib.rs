//! Infrastructure layer for Storefront.
//!
//! Contains implementations of the storage traits defined in `storefront-core`
//! (SQLite-backed key-value store), data directory resolution and the global
//! configuration loader.

pub mod config;
pub mod filesystem;
pub mod sqlite;
