//! Core streaming type aliases.

use futures::Stream;
use std::pin::Pin;

use crate::error::ModelError;
use crate::types::StreamEvent;

/// Raw event source produced by a language model handle.
///
/// This is the vendor-facing side of the streaming contract: adapters
/// translate whatever their transport emits into [`StreamEvent`] items and
/// box the result into this type.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, ModelError>> + Send>>;

/// Incremental text sequence exposed to callers.
///
/// Yields each content fragment in the order the source emitted it and
/// terminates exactly once, either normally (after the source's finish
/// event) or abnormally with an error item.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, ModelError>> + Send>>;
