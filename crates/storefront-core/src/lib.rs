//! Draft validation, persistence logic and storage trait definitions for Storefront.
//!
//! This crate defines the "ports" (storage traits) that the infrastructure
//! layer implements. It depends only on `storefront-types` -- never on
//! `storefront-infra` or any database/IO crate.

pub mod draft;
pub mod storage;
