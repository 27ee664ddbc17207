//! From implementations for converting common error types into `ModelError`.

use super::types::ModelError;

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}
