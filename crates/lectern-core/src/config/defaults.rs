//! Default values for configuration fields.

/// Default dense embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Dimensionality of the default embedding model.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;

/// Encodings kept in the in-process query cache.
pub const DEFAULT_ENCODING_CACHE_SIZE: u64 = 1024;

/// Default path of the fitted vocabulary artifact.
pub const DEFAULT_VOCABULARY_PATH: &str = "vectorizer/vocabulary.json";

/// Passages requested per search.
pub const DEFAULT_TOP_K: usize = 3;

/// Index namespace holding the corpus chunks.
pub const DEFAULT_NAMESPACE: &str = "textbook";

/// Source label used in citation lines.
pub const DEFAULT_SOURCE_LABEL: &str = "Textbook";

/// Default completion model.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-4o-mini";

/// Deterministic completions for grounded answering.
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Wall-clock budget for one resolution across all weighting attempts,
/// in milliseconds. Three sequential completion calls can be slow. 0
/// disables the deadline.
pub const DEFAULT_DEADLINE_MS: u64 = 120_000;
