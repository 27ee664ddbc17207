//! Raw stream events produced by language model handles.

use serde::{Deserialize, Serialize};

use super::common::{FinishReason, Usage};

/// A discrete event emitted by the underlying generation source.
///
/// A well-behaved source emits zero or more `TextDelta` events followed by
/// exactly one `Finish` event. Nothing may follow the `Finish` event; the
/// streaming adapter stops reading the source once it sees one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StreamEvent {
    /// Incremental text content.
    TextDelta {
        /// The text fragment
        delta: String,
    },
    /// Terminal event: the generation finished.
    Finish {
        /// Why the model stopped
        reason: FinishReason,
        /// Total token usage for the generation
        usage: Usage,
    },
}
