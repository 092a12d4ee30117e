//! Document module - In-memory XMCDA element trees.
//!
//! The codec never touches files or schema validation; it consumes an
//! already-parsed tree and produces fragments for an external writer.
//! `Element` is that boundary shape.

mod element;

pub use element::Element;
