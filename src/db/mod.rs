//! Flat-file storage: one pretty-printed JSON file per logical document.
//!
//! Layout:
//! - `document.rs`: the document kinds, their file names and defaults
//! - `files.rs`: whole-file load and atomic replace
//! - `store.rs`: the single-writer actor every request goes through
//! - `ids.rs`: record id generation

pub mod document;
pub mod files;
pub mod ids;
pub mod store;

pub use document::Document;
pub use ids::generate_id;
pub use store::{StoreHandle, spawn};
