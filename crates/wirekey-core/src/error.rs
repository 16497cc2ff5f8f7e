//! Error types for key-mapping generation

use thiserror::Error;

/// Convenience alias for generation results
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors surfaced by key-mapping generation
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Two distinct members produced the same wire key
    #[error("wire key collision: `{first}` and `{second}` both map to \"{wire_key}\"")]
    KeyCollision {
        /// The colliding wire key
        wire_key: String,
        /// First member mapping to the key, in declaration order
        first: String,
        /// Second member mapping to the key
        second: String,
    },

    /// Configuration input could not be parsed
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for GenerateError {
    fn from(e: serde_json::Error) -> Self {
        GenerateError::InvalidConfig(e.to_string())
    }
}
