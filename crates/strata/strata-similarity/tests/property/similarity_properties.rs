use proptest::prelude::*;
use strata_core::models::FeatureRecord;
use strata_similarity::{
    combined_similarity, cosine_similarity, structural_similarity, vectorize,
};

fn feature_record() -> impl Strategy<Value = FeatureRecord> {
    (
        proptest::option::of(0u32..8),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(p, c, k, i, s, r)| FeatureRecord {
            player_count: p,
            has_cooperation: c,
            has_conflict: k,
            has_information_asymmetry: i,
            has_sequential_moves: s,
            has_repeated_interaction: r,
        })
}

proptest! {
    #[test]
    fn weights_are_never_negative(s in ".{0,200}") {
        let v = vectorize(&s);
        for (_, w) in v.iter() {
            prop_assert!(w > 0.0);
        }
    }

    #[test]
    fn cosine_is_symmetric(a in "[a-z ]{0,120}", b in "[a-z ]{0,120}") {
        let va = vectorize(&a);
        let vb = vectorize(&b);
        prop_assert!((cosine_similarity(&va, &vb) - cosine_similarity(&vb, &va)).abs() < 1e-12);
    }

    #[test]
    fn cosine_is_bounded(a in ".{0,120}", b in ".{0,120}") {
        let sim = cosine_similarity(&vectorize(&a), &vectorize(&b));
        prop_assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn self_similarity_is_one(a in "[a-z]{4,10}( [a-z]{4,10}){0,10}") {
        let v = vectorize(&a);
        prop_assert!(!v.is_empty());
        prop_assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn structural_is_a_percentage(a in feature_record(), b in feature_record()) {
        let s = structural_similarity(&a, &b);
        prop_assert!((0.0..=100.0).contains(&s));
        prop_assert_eq!(s, structural_similarity(&b, &a));
    }

    #[test]
    fn combined_is_a_percentage(t in 0.0f64..=100.0, s in 0.0f64..=100.0) {
        let c = combined_similarity(t, s);
        prop_assert!((0.0..=100.0).contains(&c));
    }
}
