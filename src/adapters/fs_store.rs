//! Filesystem document store.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::document::Element;
use crate::ports::{DocumentStore, StoreError};

/// Fixed envelope for every emitted XMCDA 2.2.0 document.
pub const XMCDA_HEADER: &str = "<?xml version='1.0' encoding='UTF-8'?>\n\
<xmcda:XMCDA xmlns:xmcda='http://www.decision-deck.org/2012/XMCDA-2.2.0'\n\
\x20 xmlns:xsi='http://www.w3.org/2001/XMLSchema-instance'\n\
\x20 xsi:schemaLocation='http://www.decision-deck.org/2012/XMCDA-2.2.0 http://www.decision-deck.org/xmcda/_downloads/XMCDA-2.2.0.xsd'>\n";

/// Closing tag matching [`XMCDA_HEADER`].
pub const XMCDA_FOOTER: &str = "</xmcda:XMCDA>\n";

const MESSAGES_FILE: &str = "messages.xml";
const NO_MESSAGES_FALLBACK: &str = "Neither log nor error messages have been supplied.";

/// Writes documents into a fixed output directory.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    output_dir: PathBuf,
}

impl FsDocumentStore {
    /// Creates a store writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl DocumentStore for FsDocumentStore {
    fn write_document(&self, name: &str, fragment: &Element) -> Result<(), StoreError> {
        let path = self.output_dir.join(name);
        let mut document = String::from(XMCDA_HEADER);
        document.push_str(&fragment.to_xml());
        document.push_str(XMCDA_FOOTER);
        fs::write(&path, document)?;
        info!(file = %path.display(), "wrote XMCDA document");
        Ok(())
    }

    fn write_messages(
        &self,
        log_messages: &[String],
        error_messages: &[String],
    ) -> Result<(), StoreError> {
        let mut messages = Element::new("methodMessages");
        if !error_messages.is_empty() {
            for message in error_messages {
                messages.add_child(message_element("errorMessage", message));
            }
        } else if !log_messages.is_empty() {
            for message in log_messages {
                messages.add_child(message_element("logMessage", message));
            }
        } else {
            messages.add_child(message_element("errorMessage", NO_MESSAGES_FALLBACK));
        }
        self.write_document(MESSAGES_FILE, &messages)
    }
}

fn message_element(name: &str, text: &str) -> Element {
    Element::new(name).with_child(Element::new("text").with_text(text))
}
