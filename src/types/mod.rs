//! Public data types shared across the crate.
//!
//! This module intentionally excludes error types, which live in
//! [`crate::error`], and stream plumbing, which lives in [`crate::streaming`].

mod common;
mod request;
mod response;
mod streaming;

pub use common::{FinishReason, ModelKind, Usage};
pub use request::{GenerationRequest, ImageRequest};
pub use response::{EmbeddingResponse, GeneratedImage, ImageResponse};
pub use streaming::StreamEvent;
