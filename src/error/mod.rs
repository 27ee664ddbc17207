//! Error handling for the registry and streaming contract.
//!
//! Resolution failures are reported as two distinct kinds so callers can
//! branch on them: [`ModelError::NoSuchProvider`] (the provider name is not
//! registered) and [`ModelError::NoSuchModel`] (the id is malformed, or the
//! provider exists but produced no model). Streaming failures surface as
//! [`ModelError::StreamFailure`].

mod conversions;
mod types;

pub use types::ModelError;
