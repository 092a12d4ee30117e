//! Adapters - Implementations of the output ports.

mod fs_store;

pub use fs_store::{FsDocumentStore, XMCDA_FOOTER, XMCDA_HEADER};
