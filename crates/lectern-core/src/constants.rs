//! Workspace-wide constants.

/// Dense-only mixing weight: the first retrieval attempt.
pub const ALPHA_DENSE_ONLY: f32 = 1.0;

/// Balanced dense/sparse mixing weight.
pub const ALPHA_BALANCED: f32 = 0.5;

/// Sparse-only mixing weight: the final, lexical-precision attempt.
pub const ALPHA_SPARSE_ONLY: f32 = 0.0;
