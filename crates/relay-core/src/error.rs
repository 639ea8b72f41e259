//! Error types for the fallible boundaries of relay-core.
//!
//! The chunking pipeline itself is total. Only decoding data that crosses a
//! boundary (layout captures, language-model responses) can fail.

use thiserror::Error;

/// Errors raised while decoding data handed to or returned from collaborators
#[derive(Error, Debug)]
pub enum RelayError {
    /// A serialized layout capture is not a JSON array of lines
    #[error("Invalid layout capture: {0}")]
    InvalidLayout(#[source] serde_json::Error),

    /// The language model did not return a JSON array of items
    #[error("Invalid classification output: {source}\nraw:\n{raw}")]
    InvalidClassification {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    /// An item reported a confidence outside 0.0..=1.0
    #[error("Item {index} has confidence {confidence} outside 0.0..=1.0")]
    ConfidenceOutOfRange { index: usize, confidence: f64 },
}

pub type Result<T> = std::result::Result<T, RelayError>;
