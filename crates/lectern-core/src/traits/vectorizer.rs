use crate::errors::LecternResult;
use crate::models::SparseVector;

/// Pre-fitted sparse-term vocabulary, loaded once at startup and immutable
/// thereafter.
pub trait ISparseVectorizer: Send + Sync {
    /// Project text into term-index/weight form. Unknown terms contribute
    /// nothing; a text with no known terms yields an empty vector.
    fn transform(&self, text: &str) -> LecternResult<SparseVector>;

    /// Number of terms in the fitted vocabulary.
    fn vocabulary_size(&self) -> usize;
}
