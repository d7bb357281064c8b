use proptest::prelude::*;
use strata_sensitivity::{ParameterSet, SensitivityAnalyzer};

fn baseline() -> impl Strategy<Value = ParameterSet> {
    (0.0f64..=1.0, 0.1f64..=5.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(rt, th, ra, sa)| {
        ParameterSet {
            risk_tolerance: rt,
            time_horizon: th,
            resource_availability: ra,
            stakeholder_alignment: sa,
        }
    })
}

proptest! {
    #[test]
    fn statistics_are_ordered(seed in any::<u64>(), base in baseline(), n in 1usize..100) {
        let report = SensitivityAnalyzer::with_seed(seed).analyze_n(&base, n).unwrap();
        let s = report.statistics;
        prop_assert_eq!(report.samples.len(), n);
        prop_assert!(s.std_dev >= 0.0);
        prop_assert!(s.ci_lower <= s.ci_upper);
        prop_assert!(s.min <= s.max);
        prop_assert!(s.min <= s.mean + 1e-12 && s.mean <= s.max + 1e-12);
    }

    #[test]
    fn estimates_are_non_negative(seed in any::<u64>(), base in baseline()) {
        let report = SensitivityAnalyzer::with_seed(seed).analyze(&base).unwrap();
        for r in &report.ranking {
            prop_assert!(r.estimate >= 0.0);
        }
    }
}
