use crate::errors::LecternResult;

/// Remote dense-embedding service.
pub trait IDenseEmbedder: Send + Sync {
    /// Embed a single text, returning a fixed-length vector.
    fn embed(&self, text: &str) -> LecternResult<Vec<f32>>;

    /// Dimensionality of vectors produced by this embedder.
    fn dimensions(&self) -> usize;

    /// Identifier of the underlying embedding model.
    fn model(&self) -> &str;
}
