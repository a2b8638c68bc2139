//! Convex combination of dense and sparse query encodings.

use lectern_core::errors::{EncodingError, LecternResult};
use lectern_core::models::{HybridQuery, SparseVector};

/// Scale a dense/sparse pair into one hybrid query.
///
/// Dense values are multiplied by `alpha`, sparse values by `1 - alpha`;
/// sparse indices are untouched and nothing is renormalized. `alpha` must
/// lie in [0, 1].
pub fn hybrid_scale(dense: &[f32], sparse: &SparseVector, alpha: f32) -> LecternResult<HybridQuery> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(EncodingError::InvalidWeight { alpha }.into());
    }

    let scaled_dense = dense.iter().map(|v| v * alpha).collect();
    let scaled_sparse = SparseVector::new(
        sparse.indices.clone(),
        sparse.values.iter().map(|v| v * (1.0 - alpha)).collect(),
    );

    Ok(HybridQuery {
        alpha,
        dense: scaled_dense,
        sparse: scaled_sparse,
    })
}
