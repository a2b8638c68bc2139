use serde::{Deserialize, Serialize};

/// A passage returned by the vector index, in backend rank order.
///
/// Created by the retrieval client, consumed read-only by synthesis; not
/// persisted beyond the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPassage {
    /// Chunk text as stored in the index.
    pub text: String,
    /// Human-readable citation, `"Reference: <source>, page <N>"`.
    pub page_reference: String,
    /// Zero-based position in the backend's ranking.
    pub rank: usize,
    /// Backend similarity score; descending across one result set.
    pub score: f32,
}
