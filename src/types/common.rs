//! Common enums and value types used across the library.

use serde::{Deserialize, Serialize};

/// The capability a model handle was requested for.
///
/// Used in resolution errors so callers can tell which kind of model a
/// failing id referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// Text generation model
    Language,
    /// Text embedding model
    TextEmbedding,
    /// Image generation model
    Image,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Language => write!(f, "language model"),
            Self::TextEmbedding => write!(f, "text embedding model"),
            Self::Image => write!(f, "image model"),
        }
    }
}

/// Reason why the model stopped generating tokens.
///
/// # Examples
///
/// ```rust
/// use switchboard::types::FinishReason;
///
/// let finish_reason = FinishReason::Stop;
/// match finish_reason {
///     FinishReason::Stop => println!("Completed successfully"),
///     FinishReason::Length => println!("Reached max tokens"),
///     _ => println!("Other reason"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinishReason {
    /// Model generated a stop sequence or completed naturally.
    Stop,
    /// Model reached the maximum number of tokens.
    Length,
    /// Content was filtered due to safety/policy violations.
    ContentFilter,
    /// Model triggered tool/function calls.
    ToolCalls,
    /// An error occurred during generation.
    Error,
    /// Other provider-specific finish reason.
    Other,
}

/// Token usage for one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Input tokens used
    pub prompt_tokens: u32,
    /// Output tokens generated
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

impl Usage {
    /// Create a usage record; the total is computed from the parts.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}
