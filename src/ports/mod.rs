//! Ports - Interfaces for external dependencies.
//!
//! The codec's only outward dependency is a place to put finished
//! documents and diagnostics; adapters implement it.

mod document_store;

pub use document_store::{DocumentStore, StoreError};
