//! Shared mock models and providers for integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::borrow::Cow;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::stream;

use switchboard::error::ModelError;
use switchboard::provider::Provider;
use switchboard::streaming::EventStream;
use switchboard::traits::{ImageModel, LanguageModel, TextEmbeddingModel};
use switchboard::types::{
    EmbeddingResponse, GeneratedImage, GenerationRequest, ImageRequest, ImageResponse, StreamEvent,
};

/// Language model that replays a fixed event script.
#[derive(Debug)]
pub struct MockLanguageModel {
    id: String,
    events: Vec<Result<StreamEvent, ModelError>>,
    calls: AtomicUsize,
}

impl MockLanguageModel {
    pub fn new(id: impl Into<String>, events: Vec<Result<StreamEvent, ModelError>>) -> Self {
        Self {
            id: id.into(),
            events,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `generate_stream` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LanguageModel for MockLanguageModel {
    fn model_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    async fn generate_stream(
        &self,
        _request: GenerationRequest,
    ) -> Result<EventStream, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Box::pin(stream::iter(self.events.clone())))
    }
}

#[derive(Debug)]
pub struct MockEmbeddingModel {
    id: String,
}

impl MockEmbeddingModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait::async_trait]
impl TextEmbeddingModel for MockEmbeddingModel {
    fn model_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    async fn embed(&self, input: Vec<String>) -> Result<EmbeddingResponse, ModelError> {
        Ok(EmbeddingResponse::new(
            vec![vec![input.len() as f32]; input.len()],
            self.id.clone(),
        ))
    }
}

#[derive(Debug)]
pub struct MockImageModel {
    id: String,
}

impl MockImageModel {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait::async_trait]
impl ImageModel for MockImageModel {
    fn model_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    async fn generate_images(&self, _request: ImageRequest) -> Result<ImageResponse, ModelError> {
        Ok(ImageResponse::new(vec![GeneratedImage::Url(format!(
            "https://images.test/{}",
            self.id
        ))]))
    }
}

/// Provider with configurable capabilities that records the local model ids
/// each factory receives.
#[derive(Debug, Default)]
pub struct MockProvider {
    pub language: Option<Arc<dyn LanguageModel>>,
    pub embedding: Option<Arc<dyn TextEmbeddingModel>>,
    pub image: Option<Arc<dyn ImageModel>>,
    pub seen_ids: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn with_language(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            language: Some(model),
            ..Self::default()
        }
    }

    pub fn with_embedding(model: Arc<dyn TextEmbeddingModel>) -> Self {
        Self {
            embedding: Some(model),
            ..Self::default()
        }
    }

    pub fn with_image(model: Arc<dyn ImageModel>) -> Self {
        Self {
            image: Some(model),
            ..Self::default()
        }
    }

    fn record(&self, model_id: &str) {
        self.seen_ids.lock().unwrap().push(model_id.to_string());
    }

    pub fn seen_ids(&self) -> Vec<String> {
        self.seen_ids.lock().unwrap().clone()
    }
}

impl Provider for MockProvider {
    fn language_model(&self, model_id: &str) -> Option<Arc<dyn LanguageModel>> {
        self.record(model_id);
        self.language.clone()
    }

    fn text_embedding_model(&self, model_id: &str) -> Option<Arc<dyn TextEmbeddingModel>> {
        self.record(model_id);
        self.embedding.clone()
    }

    fn image_model(&self, model_id: &str) -> Option<Arc<dyn ImageModel>> {
        self.record(model_id);
        self.image.clone()
    }
}

/// Provider that overrides a capability but always returns `None` from it.
#[derive(Debug)]
pub struct EmptyFactoryProvider;

impl Provider for EmptyFactoryProvider {
    fn language_model(&self, _model_id: &str) -> Option<Arc<dyn LanguageModel>> {
        None
    }

    fn text_embedding_model(&self, _model_id: &str) -> Option<Arc<dyn TextEmbeddingModel>> {
        None
    }

    fn image_model(&self, _model_id: &str) -> Option<Arc<dyn ImageModel>> {
        None
    }
}

/// Provider that leaves every capability unimplemented (default bodies).
#[derive(Debug)]
pub struct NoCapabilityProvider;

impl Provider for NoCapabilityProvider {}
