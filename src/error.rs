//! Error types for dockviz.
//!
//! Library code returns [`VizError`]; the binary wraps it in `anyhow` at the top level.

use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Error, Debug)]
pub enum VizError {
    /// The input byte stream could not be fully read
    #[error("error reading all input from {source_name}")]
    InputRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes are not a JSON array of image records
    #[error("error reading JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),

    /// Parent chain loops back onto one of its own ancestors
    #[error("image {id} is its own ancestor")]
    Cycle { id: String },
}
