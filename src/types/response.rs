//! Response types returned by model handles.

use serde::{Deserialize, Serialize};

use super::common::Usage;

/// Response from a text embedding call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// One embedding vector per input string, in input order
    pub embeddings: Vec<Vec<f32>>,
    /// The model that produced the embeddings
    pub model: String,
    /// Token usage, when the provider reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl EmbeddingResponse {
    /// Create a response without usage information.
    pub fn new(embeddings: Vec<Vec<f32>>, model: impl Into<String>) -> Self {
        Self {
            embeddings,
            model: model.into(),
            usage: None,
        }
    }

    /// Attach token usage.
    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// A single generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum GeneratedImage {
    /// A URL the image can be fetched from
    Url(String),
    /// Base64-encoded image bytes
    Base64(String),
}

/// Response from an image generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResponse {
    /// The generated images
    pub images: Vec<GeneratedImage>,
}

impl ImageResponse {
    /// Create a response from a list of images.
    pub fn new(images: Vec<GeneratedImage>) -> Self {
        Self { images }
    }
}
