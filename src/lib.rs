//! xmcda-codec - Decision-analysis data extraction and re-serialization.
//!
//! This crate decodes, validates, and deterministically re-encodes the
//! XMCDA shapes shared by outranking and sorting procedures: pairwise
//! comparison matrices (against other alternatives or reference
//! profiles), criteria-interaction declarations, and category
//! affectations. Parsing and schema validation of the XML itself are the
//! job of an upstream collaborator; this crate works on already-parsed
//! element trees.

pub mod adapters;
pub mod codec;
pub mod document;
pub mod domain;
pub mod ports;
