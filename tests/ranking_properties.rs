//! Property-based tests using proptest.
//!
//! These tests verify invariants of the ranking metrics through the
//! public API.

use medir::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

// Strategy for a ranked list of distinct item ids
fn ranked_strategy() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::hash_set(0u32..1_000, 1..40).prop_map(|ids| ids.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn ndcg_is_bounded(ranked in ranked_strategy()) {
        let correct: HashSet<u32> = ranked.iter().step_by(2).copied().collect();

        let score = ndcg(&ranked, &correct, None);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn ndcg_perfect_prefix_is_one(ranked in ranked_strategy(), n_correct in 1usize..8) {
        let n = n_correct.min(ranked.len());
        let correct: HashSet<u32> = ranked.iter().take(n).copied().collect();

        let score = ndcg(&ranked, &correct, None);
        prop_assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ndcg_ignore_matches_filtered_list(ranked in ranked_strategy()) {
        prop_assume!(ranked.len() >= 2);
        let correct: HashSet<u32> = ranked.iter().skip(1).step_by(3).copied().collect();
        let ignore: HashSet<u32> = ranked.iter().step_by(4).copied().collect();
        let filtered: Vec<u32> = ranked
            .iter()
            .filter(|item| !ignore.contains(*item))
            .copied()
            .collect();

        let with_ignore = ndcg(&ranked, &correct, Some(&ignore));
        let direct = ndcg(&filtered, &correct, None);
        prop_assert!((with_ignore - direct).abs() < 1e-12);
    }

    #[test]
    fn ignoring_absent_items_changes_nothing(ranked in ranked_strategy(), k in 1usize..15) {
        let correct: HashSet<u32> = ranked.iter().step_by(2).copied().collect();
        // Ids outside the generated range never appear in the list
        let phantom: HashSet<u32> = (2_000..2_010).collect();

        prop_assert_eq!(
            ndcg(&ranked, &correct, Some(&phantom)),
            ndcg(&ranked, &correct, None)
        );
        prop_assert_eq!(
            precision_at_k(&ranked, &correct, Some(&phantom), k),
            precision_at_k(&ranked, &correct, None, k)
        );
        prop_assert_eq!(
            recall_at_k(&ranked, &correct, Some(&phantom), k),
            recall_at_k(&ranked, &correct, None, k)
        );
        prop_assert_eq!(
            hit_rate_at_k(&ranked, &correct, Some(&phantom), k),
            hit_rate_at_k(&ranked, &correct, None, k)
        );
        prop_assert_eq!(
            reciprocal_rank(&ranked, &correct, Some(&phantom)),
            reciprocal_rank(&ranked, &correct, None)
        );
        prop_assert_eq!(
            average_precision(&ranked, &correct, Some(&phantom)),
            average_precision(&ranked, &correct, None)
        );
    }

    #[test]
    fn companions_ignore_matches_filtered_list(ranked in ranked_strategy(), k in 1usize..15) {
        prop_assume!(ranked.len() >= 2);
        let correct: HashSet<u32> = ranked.iter().skip(1).step_by(3).copied().collect();
        let ignore: HashSet<u32> = ranked.iter().step_by(4).copied().collect();
        let filtered: Vec<u32> = ranked
            .iter()
            .filter(|item| !ignore.contains(*item))
            .copied()
            .collect();

        prop_assert_eq!(
            precision_at_k(&ranked, &correct, Some(&ignore), k),
            precision_at_k(&filtered, &correct, None, k)
        );
        prop_assert_eq!(
            recall_at_k(&ranked, &correct, Some(&ignore), k),
            recall_at_k(&filtered, &correct, None, k)
        );
        prop_assert_eq!(
            hit_rate_at_k(&ranked, &correct, Some(&ignore), k),
            hit_rate_at_k(&filtered, &correct, None, k)
        );
        prop_assert_eq!(
            reciprocal_rank(&ranked, &correct, Some(&ignore)),
            reciprocal_rank(&filtered, &correct, None)
        );
        prop_assert_eq!(
            average_precision(&ranked, &correct, Some(&ignore)),
            average_precision(&filtered, &correct, None)
        );
    }

    #[test]
    fn prepending_miss_never_raises_ndcg(ranked in ranked_strategy()) {
        let correct: HashSet<u32> = ranked.iter().step_by(2).copied().collect();

        let before = ndcg(&ranked, &correct, None);
        // Distractor id outside the generated range
        let mut pushed = vec![5_000u32];
        pushed.extend_from_slice(&ranked);
        let after = ndcg(&pushed, &correct, None);

        prop_assert!(after <= before + 1e-12);
    }

    #[test]
    fn precision_and_recall_agree_on_hits(ranked in ranked_strategy(), k in 1usize..20) {
        let correct: HashSet<u32> = ranked.iter().step_by(3).copied().collect();

        let p = precision_at_k(&ranked, &correct, None, k);
        let r = recall_at_k(&ranked, &correct, None, k);
        // Both ratios count the same number of hits
        prop_assert!((p * k as f64 - r * correct.len() as f64).abs() < 1e-9);

        let h = hit_rate_at_k(&ranked, &correct, None, k);
        prop_assert_eq!(h == 1.0, p > 0.0);
    }

    #[test]
    fn reciprocal_rank_is_bounded(ranked in ranked_strategy()) {
        let correct: HashSet<u32> = ranked.iter().step_by(2).copied().collect();

        let rr = reciprocal_rank(&ranked, &correct, None);
        prop_assert!((0.0..=1.0).contains(&rr));
        // Some correct item is always ranked here
        prop_assert!(rr > 0.0);
    }

    #[test]
    fn average_precision_is_bounded(ranked in ranked_strategy()) {
        let correct: HashSet<u32> = ranked.iter().step_by(2).copied().collect();

        let ap = average_precision(&ranked, &correct, None);
        prop_assert!((0.0..=1.0).contains(&ap));
    }

    #[test]
    fn report_fields_are_bounded(ranked in ranked_strategy()) {
        let correct: HashSet<u32> = ranked.iter().step_by(2).copied().collect();

        let report = RankingReport::compute(&ranked, &correct, None)
            .expect("correct set is non-empty");

        for value in [
            report.ndcg,
            report.precision_at_5,
            report.precision_at_10,
            report.recall_at_10,
            report.reciprocal_rank,
            report.average_precision,
        ] {
            prop_assert!((0.0..=1.0).contains(&value));
        }
        prop_assert_eq!(report.n_ranked, ranked.len());
        prop_assert_eq!(report.n_correct, correct.len());
    }
}
