use proptest::prelude::*;
use strata_core::dedup_hash;

proptest! {
    #[test]
    fn hash_is_a_signed_32_bit_integer(s in ".{0,200}") {
        let h = dedup_hash(&s);
        prop_assert!(h.parse::<i32>().is_ok(), "not an i32: {}", h);
    }

    #[test]
    fn hash_is_deterministic(s in ".{0,200}") {
        prop_assert_eq!(dedup_hash(&s), dedup_hash(&s));
    }

    #[test]
    fn appending_follows_the_rolling_recurrence(s in "[a-z]{0,50}", c in proptest::char::range('a', 'z')) {
        let prev: i32 = dedup_hash(&s).parse().unwrap();
        let next: i32 = dedup_hash(&format!("{s}{c}")).parse().unwrap();
        let expected = prev.wrapping_mul(31).wrapping_add(c as i32);
        prop_assert_eq!(next, expected);
    }
}
