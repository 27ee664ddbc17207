//! Provider registry and namespaced id resolution.
//!
//! The registry stores provider instances under short names and resolves
//! `"provider:model"` identifiers by splitting on the *first* separator and
//! delegating the remainder to the matched provider's capability factory.
//! It is built once via [`create_provider_registry`] and read-only from then
//! on; resolution never caches, retries, or mutates.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ModelError;
use crate::provider::Provider;
use crate::traits::{ImageModel, LanguageModel, TextEmbeddingModel};
use crate::types::ModelKind;

/// Options for creating a provider registry.
#[derive(Debug, Clone)]
pub struct RegistryOptions {
    /// Separator between the provider name and the local model id.
    pub separator: char,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self { separator: ':' }
    }
}

/// Immutable mapping from provider name to provider, with id-based
/// resolution for each capability kind.
///
/// Provider names must not contain the separator character; such a name
/// could never be matched by the resolution algorithm.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn Provider>>,
    separator: char,
}

/// Create a provider registry.
///
/// # Examples
///
/// ```rust,no_run
/// use std::collections::HashMap;
/// use std::sync::Arc;
/// use switchboard::provider::Provider;
/// use switchboard::registry::create_provider_registry;
///
/// let mut providers: HashMap<String, Arc<dyn Provider>> = HashMap::new();
/// // providers.insert("openai".to_string(), Arc::new(OpenAiProvider::new(...)));
///
/// let registry = create_provider_registry(providers, None);
/// let model = registry.language_model("openai:gpt-4o")?;
/// # Ok::<(), switchboard::error::ModelError>(())
/// ```
pub fn create_provider_registry(
    providers: HashMap<String, Arc<dyn Provider>>,
    opts: Option<RegistryOptions>,
) -> ProviderRegistry {
    let opts = opts.unwrap_or_default();
    ProviderRegistry {
        providers,
        separator: opts.separator,
    }
}

impl ProviderRegistry {
    /// Split a namespaced id into (provider name, local model id).
    ///
    /// Only the first separator is significant; a local id may itself
    /// contain further separators, which are passed through verbatim.
    fn split_id<'a>(&self, id: &'a str, kind: ModelKind) -> Result<(&'a str, &'a str), ModelError> {
        id.split_once(self.separator)
            .ok_or_else(|| ModelError::invalid_model_id(kind, id, self.separator))
    }

    /// Look up a provider by name.
    fn get_provider(&self, provider_name: &str) -> Result<&Arc<dyn Provider>, ModelError> {
        self.providers.get(provider_name).ok_or_else(|| {
            let mut available: Vec<String> = self.providers.keys().cloned().collect();
            available.sort();
            ModelError::NoSuchProvider {
                provider: provider_name.to_string(),
                available,
            }
        })
    }

    /// Resolve a language model from a `"provider:model"` id.
    pub fn language_model(&self, id: &str) -> Result<Arc<dyn LanguageModel>, ModelError> {
        let (provider_name, model_id) = self.split_id(id, ModelKind::Language)?;
        let provider = self.get_provider(provider_name)?;
        provider
            .language_model(model_id)
            .ok_or_else(|| ModelError::no_such_model(ModelKind::Language, id, provider_name))
    }

    /// Resolve a text embedding model from a `"provider:model"` id.
    pub fn text_embedding_model(
        &self,
        id: &str,
    ) -> Result<Arc<dyn TextEmbeddingModel>, ModelError> {
        let (provider_name, model_id) = self.split_id(id, ModelKind::TextEmbedding)?;
        let provider = self.get_provider(provider_name)?;
        provider
            .text_embedding_model(model_id)
            .ok_or_else(|| ModelError::no_such_model(ModelKind::TextEmbedding, id, provider_name))
    }

    /// Resolve an image model from a `"provider:model"` id.
    pub fn image_model(&self, id: &str) -> Result<Arc<dyn ImageModel>, ModelError> {
        let (provider_name, model_id) = self.split_id(id, ModelKind::Image)?;
        let provider = self.get_provider(provider_name)?;
        provider
            .image_model(model_id)
            .ok_or_else(|| ModelError::no_such_model(ModelKind::Image, id, provider_name))
    }

    /// The registered provider names, sorted.
    pub fn provider_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
