//! Error types for test generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A path step requires a feature the target vendor dialect lacks.
    #[error("vendor '{vendor}' does not support {feature}")]
    UnsupportedFeature {
        vendor: String,
        feature: &'static str,
    },

    /// The path carries step data that cannot produce well-formed SQL.
    #[error("malformed path: {0}")]
    MalformedPath(String),
}

impl GenerateError {
    /// Create an unsupported-feature error for the given vendor.
    pub fn unsupported(vendor: impl Into<String>, feature: &'static str) -> Self {
        Self::UnsupportedFeature {
            vendor: vendor.into(),
            feature,
        }
    }

    /// Create a malformed-path error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPath(message.into())
    }
}

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
