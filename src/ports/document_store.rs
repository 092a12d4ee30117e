//! Document Store Port - Output boundary for finished documents.

use thiserror::Error;

use crate::document::Element;

/// Errors raised by document stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for writing completed XMCDA documents and diagnostics.
///
/// Implementations own the document envelope: a fragment handed to
/// `write_document` is wrapped with the fixed XMCDA header and footer
/// before being stored.
pub trait DocumentStore: Send + Sync {
    /// Writes one fragment as a complete document under `name`.
    fn write_document(&self, name: &str, fragment: &Element) -> Result<(), StoreError>;

    /// Writes the `messages.xml` diagnostics file.
    ///
    /// Error messages take precedence over log messages; when neither is
    /// supplied, a fallback error message saying so is written instead.
    fn write_messages(
        &self,
        log_messages: &[String],
        error_messages: &[String],
    ) -> Result<(), StoreError>;
}
