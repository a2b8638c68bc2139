use serde_json::Value;

use crate::errors::LecternResult;
use crate::models::SparseVector;

/// One raw match from the vector index, before metadata validation.
#[derive(Debug, Clone)]
pub struct IndexMatch {
    pub id: String,
    pub score: f32,
    /// Backend metadata payload; shape is validated by the retrieval client.
    pub metadata: Option<Value>,
}

/// Remote vector index queried with a hybrid representation.
pub trait IVectorIndex: Send + Sync {
    /// Run one similarity search. Results come back in descending score
    /// order. A `None` sparse component must be omitted from the request
    /// entirely, not sent as empty lists.
    fn query(
        &self,
        dense: &[f32],
        sparse: Option<&SparseVector>,
        top_k: usize,
        namespace: &str,
    ) -> LecternResult<Vec<IndexMatch>>;
}
