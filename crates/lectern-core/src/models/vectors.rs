//! Query vector representations: sparse, dense, and their hybrid combination.

use serde::{Deserialize, Serialize};

/// Term-weighted sparse vector in parallel index/value form.
///
/// Indices are vocabulary term positions; each appears at most once and
/// their order carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub indices: Vec<u32>,
    pub values: Vec<f32>,
}

impl SparseVector {
    pub fn new(indices: Vec<u32>, values: Vec<f32>) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        Self { indices, values }
    }

    /// A sparse vector with no terms.
    pub fn empty() -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Whether the vector has no terms at all.
    ///
    /// An empty sparse component is omitted from index queries entirely;
    /// the backend rejects empty index/value lists.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.indices.len()
    }
}

/// Dense + sparse encodings of one query.
///
/// Produced once per resolution and reused for every weighting attempt;
/// encoding does not depend on the mixing weight.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorRepresentation {
    pub dense: Vec<f32>,
    pub sparse: SparseVector,
}

/// A convex combination of dense and sparse encodings for one attempt.
///
/// Dense values are scaled by alpha, sparse values by (1 - alpha). The
/// transform is linear; nothing is renormalized. At alpha = 0 the all-zero
/// dense vector is still sent; the backend reads it as "ignore dense".
#[derive(Debug, Clone, PartialEq)]
pub struct HybridQuery {
    pub alpha: f32,
    pub dense: Vec<f32>,
    pub sparse: SparseVector,
}
