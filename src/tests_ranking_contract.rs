// =========================================================================
// FALSIFY-RK: Ranking metrics contract (medir ranking)
//
// Five-Whys (MEDIR-21):
//   Why 1: medir had no inline FALSIFY-RK-* tests for ranking metrics
//   Why 2: unit tests pin worked examples but not the metric contracts
//   Why 3: no YAML contract for ranking metrics yet
//   Why 4: left-out rank accounting interacts with discounts in subtle ways
//   Why 5: NDCG/MAP were "obviously correct" (standard formulae)
//
// References:
//   - Jarvelin & Kekalainen (2002) "Cumulated gain-based evaluation of IR"
// =========================================================================

use std::collections::HashSet;

use crate::ranking::*;

/// FALSIFY-RK-001: NDCG is in [0, 1] for distinct ranked items
#[test]
fn falsify_rk_001_ndcg_bounded() {
    let ranked = vec![5, 3, 1, 4, 2];

    for take in 1..=5 {
        let correct: HashSet<i32> = [3, 4, 1, 5, 2].iter().take(take).copied().collect();
        let score = ndcg(&ranked, &correct, None);
        assert!(
            (0.0..=1.0).contains(&score),
            "FALSIFIED RK-001: ndcg={score} for {take} correct items, expected in [0,1]"
        );
    }
}

/// FALSIFY-RK-002: Any permutation of the correct set on top scores 1.0
#[test]
fn falsify_rk_002_perfect_prefix_is_one() {
    let correct = HashSet::from([1, 2, 3]);

    for ranked in [[1, 2, 3], [3, 1, 2], [2, 3, 1]] {
        let score = ndcg(&ranked, &correct, None);
        assert!(
            (score - 1.0).abs() < 1e-12,
            "FALSIFIED RK-002: ndcg={score} for perfect ranking {ranked:?}"
        );
    }
}

/// FALSIFY-RK-003: Ignoring items equals scoring the filtered list
#[test]
fn falsify_rk_003_ignore_matches_filtered() {
    let ranked = vec![7, 3, 9, 5, 1, 8];
    let correct = HashSet::from([5, 1]);
    let ignore = HashSet::from([7, 9]);

    let with_ignore = ndcg(&ranked, &correct, Some(&ignore));
    let filtered: Vec<i32> = ranked
        .iter()
        .filter(|item| !ignore.contains(*item))
        .copied()
        .collect();
    let direct = ndcg(&filtered, &correct, None);

    assert!(
        (with_ignore - direct).abs() < 1e-15,
        "FALSIFIED RK-003: with_ignore={with_ignore}, filtered={direct}"
    );
}

/// FALSIFY-RK-004: Ideal DCG is positive and strictly increasing in set size
#[test]
fn falsify_rk_004_ideal_dcg_monotone() {
    let mut prev = 0.0;
    for n in 1..=32 {
        let idcg = ideal_dcg(n);
        assert!(
            idcg > prev,
            "FALSIFIED RK-004: ideal_dcg({n})={idcg}, not above {prev}"
        );
        prev = idcg;
    }
}

/// FALSIFY-RK-005: Precision, recall, hit rate, RR, and AP are in [0, 1]
#[test]
fn falsify_rk_005_companions_bounded() {
    let ranked = vec![5, 3, 1, 4, 2];
    let correct = HashSet::from([3, 2]);

    for k in 1..=6 {
        for value in [
            precision_at_k(&ranked, &correct, None, k),
            recall_at_k(&ranked, &correct, None, k),
            hit_rate_at_k(&ranked, &correct, None, k),
        ] {
            assert!(
                (0.0..=1.0).contains(&value),
                "FALSIFIED RK-005: value={value} at k={k}, expected in [0,1]"
            );
        }
    }

    let rr = reciprocal_rank(&ranked, &correct, None);
    let ap = average_precision(&ranked, &correct, None);
    assert!((0.0..=1.0).contains(&rr), "FALSIFIED RK-005: rr={rr}");
    assert!((0.0..=1.0).contains(&ap), "FALSIFIED RK-005: ap={ap}");
}

/// FALSIFY-RK-006: Report computation rejects an empty correct set
#[test]
fn falsify_rk_006_report_rejects_empty_truth() {
    let ranked = vec![1, 2, 3];
    let correct: HashSet<i32> = HashSet::new();

    let result = RankingReport::compute(&ranked, &correct, None);
    assert!(
        result.is_err(),
        "FALSIFIED RK-006: empty correct set produced a report"
    );
}

/// FALSIFY-RK-007: Prepending a non-correct item never raises NDCG
#[test]
fn falsify_rk_007_prepended_miss_never_raises() {
    let ranked = vec![4, 1, 3];
    let correct = HashSet::from([1, 3]);

    let before = ndcg(&ranked, &correct, None);
    let after = ndcg(&[9, 4, 1, 3], &correct, None);

    assert!(
        after < before,
        "FALSIFIED RK-007: ndcg rose from {before} to {after} after prepending a miss"
    );
}

/// FALSIFY-RK-008: Hit rate is binary and monotone non-decreasing in K
#[test]
fn falsify_rk_008_hit_rate_binary_monotone() {
    let ranked = vec![5, 3, 1, 4, 2];
    let correct = HashSet::from([1]);

    let mut prev = 0.0;
    for k in 1..=6 {
        let h = hit_rate_at_k(&ranked, &correct, None, k);
        assert!(
            h == 0.0 || h == 1.0,
            "FALSIFIED RK-008: hit_rate={h} at k={k}, expected 0.0 or 1.0"
        );
        assert!(
            h >= prev,
            "FALSIFIED RK-008: hit_rate decreased from {prev} to {h} at k={k}"
        );
        prev = h;
    }
}

mod rk_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-RK-001-prop: NDCG in [0, 1] for random permutations
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_rk_001_prop_ndcg_bounded(
            n in 3..=10usize,
            m in 1..=4usize,
            seed in 0..500u32,
        ) {
            let ranked: Vec<usize> = (0..n).map(|i| (i + seed as usize) % n).collect();
            let correct: HashSet<usize> = (0..m).map(|j| (j * 3 + seed as usize) % n).collect();

            let score = ndcg(&ranked, &correct, None);
            prop_assert!(
                (0.0..=1.0001).contains(&score),
                "FALSIFIED RK-001-prop: ndcg={} not in [0,1]",
                score
            );
        }
    }

    /// FALSIFY-RK-003-prop: Ignore equivalence on random lists
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_rk_003_prop_ignore_matches_filtered(
            n in 4..=12usize,
            seed in 0..500u32,
        ) {
            let ranked: Vec<usize> = (0..n).map(|i| (i + seed as usize) % n).collect();
            // skip(1).step_by(3) yields at least one item for n >= 4
            let correct: HashSet<usize> = ranked.iter().skip(1).step_by(3).copied().collect();
            let ignore: HashSet<usize> = ranked.iter().step_by(4).copied().collect();
            let filtered: Vec<usize> = ranked
                .iter()
                .filter(|item| !ignore.contains(*item))
                .copied()
                .collect();

            let with_ignore = ndcg(&ranked, &correct, Some(&ignore));
            let direct = ndcg(&filtered, &correct, None);
            prop_assert!(
                (with_ignore - direct).abs() < 1e-12,
                "FALSIFIED RK-003-prop: with_ignore={} filtered={}",
                with_ignore, direct
            );
        }
    }

    /// FALSIFY-RK-007-prop: Prepending a miss never raises NDCG
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_rk_007_prop_prepended_miss_never_raises(
            n in 3..=10usize,
            seed in 0..500u32,
        ) {
            let ranked: Vec<usize> = (0..n).map(|i| (i + seed as usize) % n).collect();
            let correct: HashSet<usize> = ranked.iter().step_by(2).copied().collect();

            let before = ndcg(&ranked, &correct, None);
            let mut pushed = vec![n + 1];
            pushed.extend_from_slice(&ranked);
            let after = ndcg(&pushed, &correct, None);

            prop_assert!(
                after <= before + 1e-12,
                "FALSIFIED RK-007-prop: before={} after={}",
                before, after
            );
        }
    }
}
