//! Streaming response contract for text generation.
//!
//! A text generation call produces one underlying event source
//! ([`EventStream`]) that this module adapts into three independently
//! consumable views:
//!
//! - the incremental text sequence ([`StreamTextResult::stream`]),
//! - the deferred total token usage ([`StreamTextResult::usage`]),
//! - the deferred finish reason ([`StreamTextResult::finish_reason`]).
//!
//! Both deferred values are backed by a single internal completion cell
//! written exactly once by the stream's terminal handler, so they always
//! resolve (or reject) together.

mod text;
mod types;

pub use text::{StreamTextResult, stream_text};
pub use types::{EventStream, TextStream};
