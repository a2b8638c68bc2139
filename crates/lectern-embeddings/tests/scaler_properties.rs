use lectern_core::models::SparseVector;
use lectern_embeddings::hybrid_scale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn dense_values_equal_input_times_alpha(
        dense in proptest::collection::vec(-10.0f32..10.0, 0..32),
        alpha in 0.0f32..=1.0,
    ) {
        let hybrid = hybrid_scale(&dense, &SparseVector::empty(), alpha).unwrap();
        prop_assert_eq!(hybrid.dense.len(), dense.len());
        for (scaled, original) in hybrid.dense.iter().zip(&dense) {
            prop_assert_eq!(*scaled, original * alpha);
        }
    }

    #[test]
    fn sparse_values_equal_input_times_one_minus_alpha(
        values in proptest::collection::vec(0.0f32..5.0, 1..16),
        alpha in 0.0f32..=1.0,
    ) {
        let indices: Vec<u32> = (0..values.len() as u32).collect();
        let sparse = SparseVector::new(indices.clone(), values.clone());
        let hybrid = hybrid_scale(&[1.0], &sparse, alpha).unwrap();
        prop_assert_eq!(hybrid.sparse.indices, indices);
        for (scaled, original) in hybrid.sparse.values.iter().zip(&values) {
            prop_assert_eq!(*scaled, original * (1.0 - alpha));
        }
    }

    #[test]
    fn out_of_range_alpha_always_rejected(alpha in prop_oneof![-100.0f32..-0.001, 1.001f32..100.0]) {
        prop_assert!(hybrid_scale(&[1.0], &SparseVector::empty(), alpha).is_err());
    }
}
