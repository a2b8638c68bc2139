use crate::constants::{ALPHA_BALANCED, ALPHA_DENSE_ONLY, ALPHA_SPARSE_ONLY};
use crate::errors::{EncodingError, LecternResult};

/// The ordered dense/sparse weighting schedule for retrieval fallback.
///
/// Attempts run in exactly this order. The schedule is fixed policy: it is
/// never reordered or skipped adaptively based on observed scores. Dense
/// retrieval leads because it best captures paraphrased questions; sparse
/// comes last as a precise-term fallback for defined-term lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaSchedule(Vec<f32>);

impl Default for AlphaSchedule {
    /// Dense-only, then balanced, then sparse-only.
    fn default() -> Self {
        Self(vec![ALPHA_DENSE_ONLY, ALPHA_BALANCED, ALPHA_SPARSE_ONLY])
    }
}

impl AlphaSchedule {
    /// Build a schedule from explicit weights, each in [0, 1].
    pub fn new(weights: Vec<f32>) -> LecternResult<Self> {
        for &alpha in &weights {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(EncodingError::InvalidWeight { alpha }.into());
            }
        }
        Ok(Self(weights))
    }

    /// Weights in attempt order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().copied()
    }

    /// Number of attempts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LecternError;

    #[test]
    fn default_order_is_dense_first() {
        let schedule = AlphaSchedule::default();
        let weights: Vec<f32> = schedule.iter().collect();
        assert_eq!(weights, vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn rejects_out_of_range_weights() {
        let result = AlphaSchedule::new(vec![1.0, 1.5]);
        assert!(matches!(
            result,
            Err(LecternError::Encoding(EncodingError::InvalidWeight { .. }))
        ));
    }

    #[test]
    fn accepts_boundary_weights() {
        let schedule = AlphaSchedule::new(vec![0.0, 1.0]).unwrap();
        assert_eq!(schedule.len(), 2);
    }
}
