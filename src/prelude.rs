//! Convenience re-exports for common usage.
//!
//! ```rust
//! use switchboard::prelude::*;
//! ```

pub use crate::error::ModelError;
pub use crate::provider::Provider;
pub use crate::registry::{ProviderRegistry, RegistryOptions, create_provider_registry};
pub use crate::streaming::{EventStream, StreamTextResult, TextStream, stream_text};
pub use crate::traits::{ImageModel, LanguageModel, TextEmbeddingModel};
pub use crate::types::{
    EmbeddingResponse, FinishReason, GeneratedImage, GenerationRequest, ImageRequest,
    ImageResponse, ModelKind, StreamEvent, Usage,
};
