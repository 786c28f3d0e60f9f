//! # Document Errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The markup could not be parsed
    #[error("XML parse error: {message}")]
    Xml { message: String },

    /// No `<svg>` root element was found
    #[error("document has no <svg> root element")]
    MissingRoot,

    /// A size attribute is not a number in user units
    #[error("invalid {attribute} attribute: '{value}'")]
    InvalidAttribute { attribute: &'static str, value: String },

    /// The resolved width cannot be scaled from
    #[error("document width must be positive, got {width}")]
    NonPositiveWidth { width: f64 },
}

impl DocumentError {
    /// Creates an invalid attribute error.
    pub fn invalid_attribute(attribute: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            attribute,
            value: value.into(),
        }
    }

    /// Creates an XML parse error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml {
            message: message.into(),
        }
    }
}
