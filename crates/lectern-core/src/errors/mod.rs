//! Error types for the lectern workspace.
//!
//! Each subsystem defines its own error enum; `LecternError` aggregates
//! them for propagation across crate boundaries. Every variant here is
//! terminal for the resolution that raised it: the cascade never retries
//! a transport failure, and "no relevant passage found" is a normal
//! outcome, not an error.

mod encoding_error;
mod retrieval_error;
mod synthesis_error;

pub use encoding_error::EncodingError;
pub use retrieval_error::RetrievalError;
pub use synthesis_error::SynthesisError;

/// Convenience alias used across the workspace.
pub type LecternResult<T> = Result<T, LecternError>;

/// Top-level error: every failure a resolution can surface to its caller.
#[derive(Debug, thiserror::Error)]
pub enum LecternError {
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("retrieval failed: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("resolution deadline exceeded: {elapsed_ms}ms elapsed of {budget_ms}ms budget")]
    DeadlineExceeded { elapsed_ms: u64, budget_ms: u64 },

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
