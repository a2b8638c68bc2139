/// Vector-index transport errors.
///
/// A transport failure is not evidence of "no match": it is fatal for the
/// resolution and never triggers fallback to the next weighting attempt.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("vector index unavailable: {reason}")]
    BackendUnavailable { reason: String },

    #[error("vector index returned an unreadable response: {reason}")]
    InvalidResponse { reason: String },
}
