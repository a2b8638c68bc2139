use lectern_core::models::*;

#[test]
fn sparse_vector_empty_has_no_terms() {
    let sparse = SparseVector::empty();
    assert!(sparse.is_empty());
    assert_eq!(sparse.len(), 0);
}

#[test]
fn sparse_vector_len_counts_terms() {
    let sparse = SparseVector::new(vec![3, 17, 42], vec![0.5, 0.2, 0.1]);
    assert!(!sparse.is_empty());
    assert_eq!(sparse.len(), 3);
}

#[test]
fn sparse_vector_round_trips_through_json() {
    let sparse = SparseVector::new(vec![1, 9], vec![0.7, 0.3]);
    let json = serde_json::to_string(&sparse).unwrap();
    let back: SparseVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, sparse);
}

#[test]
fn passage_round_trips_through_json() {
    let passage = RetrievedPassage {
        text: "Chunk text.".into(),
        page_reference: "Reference: Textbook, page 12".into(),
        rank: 0,
        score: 0.91,
    };
    let json = serde_json::to_string(&passage).unwrap();
    let back: RetrievedPassage = serde_json::from_str(&json).unwrap();
    assert_eq!(back, passage);
}

#[test]
fn resolution_kind_distinguishes_outcomes() {
    let grounded = Resolution {
        text: "An answer.".into(),
        kind: ResolutionKind::Grounded {
            alpha: 0.5,
            rank: 1,
        },
    };
    assert!(matches!(
        grounded.kind,
        ResolutionKind::Grounded { rank: 1, .. }
    ));

    let exhausted = Resolution {
        text: "Nothing found.".into(),
        kind: ResolutionKind::Exhausted,
    };
    assert_eq!(exhausted.kind, ResolutionKind::Exhausted);
}
