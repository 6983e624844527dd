//! Configuration documents checked by the sifter
//!
//! Search nodes send their configuration to the sifter so it can confirm all
//! nodes run with the same settings. The client never parses the document.

use serde::{Deserialize, Serialize};

/// A configuration document submitted for validation
///
/// The text is opaque and sent verbatim, even if it is not valid YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRequest {
    document: String,
}

impl ConfigRequest {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }
}

/// The sifter's verdict on a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigResponse {
    accepted: bool,
}

impl ConfigResponse {
    pub fn new(accepted: bool) -> Self {
        Self { accepted }
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }
}
