//! Model capability traits.
//!
//! A model handle is an opaque capability object returned by a provider for
//! one specific model. The registry never inspects handles; it only passes
//! them through. Providers implement whichever traits their backend supports.

use std::borrow::Cow;
use std::fmt::Debug;

use crate::error::ModelError;
use crate::streaming::EventStream;
use crate::types::{EmbeddingResponse, GenerationRequest, ImageRequest, ImageResponse};

/// A text generation model.
#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync + Debug {
    /// The local model identifier, e.g. `"gpt-4o-mini"`.
    fn model_id(&self) -> Cow<'_, str>;

    /// Start a generation and return the raw event source.
    ///
    /// The returned stream must emit zero or more text deltas followed by
    /// exactly one finish event; callers usually wrap it with
    /// [`crate::streaming::stream_text`] rather than consuming it directly.
    async fn generate_stream(&self, request: GenerationRequest)
    -> Result<EventStream, ModelError>;
}

/// A text embedding model.
#[async_trait::async_trait]
pub trait TextEmbeddingModel: Send + Sync + Debug {
    /// The local model identifier.
    fn model_id(&self) -> Cow<'_, str>;

    /// Embed a batch of input strings.
    async fn embed(&self, input: Vec<String>) -> Result<EmbeddingResponse, ModelError>;
}

/// An image generation model.
#[async_trait::async_trait]
pub trait ImageModel: Send + Sync + Debug {
    /// The local model identifier.
    fn model_id(&self) -> Cow<'_, str>;

    /// Generate one or more images for a prompt.
    async fn generate_images(&self, request: ImageRequest) -> Result<ImageResponse, ModelError>;
}
