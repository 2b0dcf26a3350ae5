//! Shared domain types for Storefront.
//!
//! This crate contains the types used across the creator-store draft flow:
//! DraftProduct, its media and save mode, field validation results, global
//! configuration and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod product;
pub mod validation;
