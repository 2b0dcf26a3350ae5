//! The add/edit-product draft workflow.
//!
//! - `validator`: required-field checks producing inline error messages
//! - `store`: upsert-by-id persistence of validated drafts
//! - `editor`: the in-memory editing session driving both

pub mod editor;
pub mod store;
pub mod validator;
