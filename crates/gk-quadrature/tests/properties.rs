//! Property tests: the structural invariants must hold for every order,
//! not just the hand-checked ones.

use gk_quadrature::GaussKronrodRule;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_rule_is_well_formed(n in 1usize..=50) {
        let rule = GaussKronrodRule::<f64>::new(n, 1.0e-12).unwrap();
        let x = rule.abscissae();
        let w1 = rule.kronrod_weights();
        let w2 = rule.gauss_weights();

        prop_assert_eq!(x.len(), n + 1);
        prop_assert_eq!(w1.len(), n + 1);
        prop_assert_eq!(w2.len(), n + 1);

        for i in 0..=n {
            prop_assert!(w1[i] > 0.0, "w1[{}] = {}", i, w1[i]);
            prop_assert!(w2[i] >= 0.0, "w2[{}] = {}", i, w2[i]);
            if i > 0 {
                prop_assert!(x[i] < x[i - 1], "x not strictly decreasing at {}", i);
            }
        }
        prop_assert!(x[0] < 1.0);
        prop_assert_eq!(x[n], 0.0);

        let mut kronrod_sum = 0.0;
        let mut gauss_sum = 0.0;
        for i in 0..=n {
            let fold = if x[i] == 0.0 { 1.0 } else { 2.0 };
            kronrod_sum += fold * w1[i];
            gauss_sum += fold * w2[i];
        }
        prop_assert!((kronrod_sum - 2.0).abs() < 1.0e-10, "Kronrod sum = {}", kronrod_sum);
        prop_assert!((gauss_sum - 2.0).abs() < 1.0e-10, "Gauss sum = {}", gauss_sum);
    }

    #[test]
    fn regeneration_is_idempotent(n in 1usize..=30) {
        let a = GaussKronrodRule::<f64>::new(n, 1.0e-11).unwrap();
        let b = GaussKronrodRule::<f64>::new(n, 1.0e-11).unwrap();
        prop_assert_eq!(a.abscissae(), b.abscissae());
        prop_assert_eq!(a.kronrod_weights(), b.kronrod_weights());
        prop_assert_eq!(a.gauss_weights(), b.gauss_weights());
    }
}
