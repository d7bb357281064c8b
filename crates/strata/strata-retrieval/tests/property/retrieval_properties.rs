use proptest::prelude::*;
use strata_retrieval::{clamp_top_k, embedding_cosine};

proptest! {
    #[test]
    fn cosine_is_bounded_and_symmetric(
        a in proptest::collection::vec(-10.0f32..10.0, 128),
        b in proptest::collection::vec(-10.0f32..10.0, 128),
    ) {
        let ab = embedding_cosine(&a, &b).unwrap();
        let ba = embedding_cosine(&b, &a).unwrap();
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-12);
    }

    #[test]
    fn mismatched_lengths_never_score(
        a in proptest::collection::vec(-1.0f32..1.0, 1..200),
        b in proptest::collection::vec(-1.0f32..1.0, 1..200),
    ) {
        prop_assume!(a.len() != b.len());
        prop_assert!(embedding_cosine(&a, &b).is_none());
    }

    #[test]
    fn top_k_always_within_bounds(k in any::<i64>()) {
        let clamped = clamp_top_k(Some(k));
        prop_assert!((1..=20).contains(&clamped));
    }
}
