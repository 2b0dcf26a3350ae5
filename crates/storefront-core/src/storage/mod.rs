//! Storage abstractions for Storefront.
//!
//! Defines the key-value boundary and the draft collection repository.
//! Concrete key-value backends live in storefront-infra.

pub mod draft_repository;
pub mod kv_store;

#[cfg(test)]
pub(crate) mod testing;
