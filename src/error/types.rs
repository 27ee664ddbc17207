//! Core error enum.

use thiserror::Error;

use crate::types::ModelKind;

/// Errors produced by registry resolution, model handles, and streaming.
///
/// The enum is `Clone` because a single streaming failure must reject every
/// outstanding consumption path (the text stream and both deferred values)
/// with the same cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Requested provider name is not present in the registry.
    #[error("No such provider: {provider}. Available providers: {available:?}")]
    NoSuchProvider {
        /// The requested provider name
        provider: String,
        /// Names registered in the registry, sorted
        available: Vec<String>,
    },

    /// Requested id has no provider separator, or the provider exists but
    /// produced no model for this capability and local id.
    #[error("{message}")]
    NoSuchModel {
        /// The full requested id
        model_id: String,
        /// The capability kind the id was resolved for
        kind: ModelKind,
        /// The provider name, when resolution got far enough to know it
        provider: Option<String>,
        /// Human-readable description of the failure
        message: String,
    },

    /// The underlying generation source failed, before or during streaming.
    #[error("Stream failure: {0}")]
    StreamFailure(String),

    /// A provider or model handle was misconfigured.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The operation is not supported by this provider or model.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl ModelError {
    /// Error for a provider that exists but produced no model for the id.
    pub fn no_such_model(kind: ModelKind, model_id: &str, provider: &str) -> Self {
        Self::NoSuchModel {
            model_id: model_id.to_string(),
            kind,
            provider: Some(provider.to_string()),
            message: format!("No such {kind}: {model_id} (provider: {provider})"),
        }
    }

    /// Error for an id that does not contain the provider separator.
    pub fn invalid_model_id(kind: ModelKind, model_id: &str, separator: char) -> Self {
        Self::NoSuchModel {
            model_id: model_id.to_string(),
            kind,
            provider: None,
            message: format!(
                "Invalid {kind} id for registry: {model_id} \
                 (must be \"provider{separator}model\")"
            ),
        }
    }
}
