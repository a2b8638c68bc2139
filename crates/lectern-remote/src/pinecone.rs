//! Pinecone-compatible vector index client.

use lectern_core::errors::{LecternResult, RetrievalError};
use lectern_core::models::SparseVector;
use lectern_core::traits::{IVectorIndex, IndexMatch};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Client for a Pinecone-compatible `/query` endpoint.
///
/// `host` is the index's data-plane endpoint; one instance per index,
/// shared behind `Arc`.
pub struct PineconeIndex {
    http: Client,
    host: String,
    api_key: String,
}

impl PineconeIndex {
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            http: Client::new(),
            host: host.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    namespace: &'a str,
    vector: &'a [f32],
    /// Omitted from the body entirely when `None`; the backend rejects
    /// empty index/value lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    sparse_vector: Option<SparseBody<'a>>,
    top_k: usize,
    include_metadata: bool,
}

#[derive(Serialize)]
struct SparseBody<'a> {
    indices: &'a [u32],
    values: &'a [f32],
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<MatchBody>,
}

#[derive(Deserialize)]
struct MatchBody {
    id: String,
    #[serde(default)]
    score: f32,
    metadata: Option<Value>,
}

impl IVectorIndex for PineconeIndex {
    fn query(
        &self,
        dense: &[f32],
        sparse: Option<&SparseVector>,
        top_k: usize,
        namespace: &str,
    ) -> LecternResult<Vec<IndexMatch>> {
        let request = QueryRequest {
            namespace,
            vector: dense,
            sparse_vector: sparse.map(|s| SparseBody {
                indices: &s.indices,
                values: &s.values,
            }),
            top_k,
            include_metadata: true,
        };

        let response = self
            .http
            .post(format!("{}/query", self.host))
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .map_err(|e| RetrievalError::BackendUnavailable {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(RetrievalError::BackendUnavailable {
                reason: format!("HTTP {}", response.status()),
            }
            .into());
        }

        let body: QueryResponse =
            response
                .json()
                .map_err(|e| RetrievalError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        debug!(matches = body.matches.len(), namespace, "index query complete");
        Ok(body
            .matches
            .into_iter()
            .map(|m| IndexMatch {
                id: m.id,
                score: m.score,
                metadata: m.metadata,
            })
            .collect())
    }
}
