//! Error types for id generation, query serialization and masking.

use thiserror::Error;

/// Errors returned by the fallible helpers in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrkitError {
    /// The requested id length cannot hold the timestamp component or
    /// exceeds the supported maximum.
    #[error("Invalid length {length}: must be between {minimum} and {maximum}")]
    InvalidLength {
        /// Length asked for by the caller.
        length: usize,
        /// Length of the base-36 timestamp at generation time.
        minimum: usize,
        /// Largest random tail the generator accepts.
        maximum: usize,
    },

    /// Params passed to the stringifier are not a key/value object.
    #[error("Invalid params: expected an object, got {0}")]
    InvalidParams(String),

    /// The pair separator is empty or contains `=`.
    #[error("Invalid separator {0:?}: must be non-empty and must not contain '='")]
    InvalidSeparator(String),

    /// Visible character counts for masking are negative.
    #[error("Invalid range: start ({start}) and end ({end}) must be non-negative")]
    InvalidRange {
        /// Visible characters at the start.
        start: i64,
        /// Visible characters at the end.
        end: i64,
    },

    /// An array format name was not recognised.
    #[error("Invalid array format: {0}")]
    InvalidArrayFormat(String),

    /// A query string could not be decoded into pairs.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StrkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StrkitError::InvalidLength {
                length: 4,
                minimum: 8,
                maximum: 4096
            }
            .to_string(),
            "Invalid length 4: must be between 8 and 4096"
        );

        assert_eq!(
            StrkitError::InvalidSeparator("=".to_string()).to_string(),
            "Invalid separator \"=\": must be non-empty and must not contain '='"
        );

        assert_eq!(
            StrkitError::InvalidRange { start: -1, end: 2 }.to_string(),
            "Invalid range: start (-1) and end (2) must be non-negative"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            StrkitError::InvalidParams("array".to_string()),
            StrkitError::InvalidParams("array".to_string())
        );
        assert_ne!(
            StrkitError::InvalidParams("array".to_string()),
            StrkitError::InvalidSeparator("".to_string())
        );
    }
}
