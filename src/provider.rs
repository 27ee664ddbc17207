//! Provider capability contract.

use std::fmt::Debug;
use std::sync::Arc;

use crate::traits::{ImageModel, LanguageModel, TextEmbeddingModel};

/// A named bundle of model-producing capabilities for one vendor/backend.
///
/// Each factory maps a *local* model id (everything after the provider
/// separator) to a model handle. All factories have default bodies returning
/// `None`, so a provider only overrides the capabilities it supports; a
/// capability that is never overridden behaves exactly like one whose factory
/// returns `None` for every id. The registry normalizes both cases to the
/// same `NoSuchModel` error.
///
/// Factories are synchronous and must not perform I/O. Building a
/// lazily-configured client object is fine; network calls happen when the
/// handle is used, not when it is resolved.
///
/// # Examples
///
/// ```rust,ignore
/// struct ReplicateProvider { /* auth, base url, ... */ }
///
/// impl Provider for ReplicateProvider {
///     // image generation only; language/embedding stay unimplemented
///     fn image_model(&self, model_id: &str) -> Option<Arc<dyn ImageModel>> {
///         Some(Arc::new(self.build_image_model(model_id)))
///     }
/// }
/// ```
pub trait Provider: Send + Sync + Debug {
    /// Create a language model handle for the given local model id.
    fn language_model(&self, model_id: &str) -> Option<Arc<dyn LanguageModel>> {
        let _ = model_id;
        None
    }

    /// Create a text embedding model handle for the given local model id.
    fn text_embedding_model(&self, model_id: &str) -> Option<Arc<dyn TextEmbeddingModel>> {
        let _ = model_id;
        None
    }

    /// Create an image model handle for the given local model id.
    fn image_model(&self, model_id: &str) -> Option<Arc<dyn ImageModel>> {
        let _ = model_id;
        None
    }
}
