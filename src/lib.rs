//! switchboard
//!
//! Provider-agnostic access layer for generative-model services. Callers
//! request a capability by a namespaced `"provider:model"` identifier without
//! depending on any vendor's API shape:
//!
//! - [`provider::Provider`] — a named bundle of model capability factories.
//! - [`registry`] — resolves namespaced ids to model handles by delegating
//!   to the matched provider.
//! - [`streaming`] — the uniform streaming-response contract returned by a
//!   text generation call: incremental text plus deferred usage and finish
//!   reason.
//!
//! Vendor adapters (HTTP transport, auth, payload translation) live outside
//! this crate; they plug in by implementing the [`provider::Provider`] and
//! model capability traits.
#![deny(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod provider;
pub mod registry;
pub mod streaming;
pub mod traits;
pub mod types;

pub use error::ModelError;
pub use registry::{ProviderRegistry, RegistryOptions, create_provider_registry};
pub use streaming::{StreamTextResult, stream_text};
