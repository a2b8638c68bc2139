/// Query-encoding errors: dense embedding, vocabulary, and weighting.
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("embedding service unavailable: {reason}")]
    EmbeddingUnavailable { reason: String },

    #[error("mixing weight {alpha} outside [0, 1]")]
    InvalidWeight { alpha: f32 },

    #[error("vocabulary load failed at {path}: {reason}")]
    VocabularyLoadFailed { path: String, reason: String },
}
