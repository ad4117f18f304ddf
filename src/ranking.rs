//! Ranked-list evaluation metrics for recommendation and retrieval systems.
//!
//! All metrics share one calling convention: a ranked list of item ids
//! (best first), the set of correct items, and an optional set of items to
//! leave out of rank accounting. Relevance is binary: an item is either
//! correct or it is not.
//!
//! Common use cases:
//! - Leave-one-out evaluation of recommenders
//! - Information retrieval benchmarks
//! - Search result ranking

use std::collections::HashSet;
use std::f64::consts::LN_2;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{MedirError, Result};

/// Normalized Discounted Cumulative Gain for one ranked list.
///
/// Walks the list from the top. Ignored items are skipped and do not
/// consume a rank, so an item ranked behind three ignored items is scored
/// as if it were ranked three positions higher. Each correct item at
/// effective rank `r` contributes `ln(2) / ln(r + 1)` to the DCG, and the
/// total is normalized by [`ideal_dcg`] of the correct-set size.
///
/// # Arguments
///
/// * `ranked_items` - Item ids ordered best first, expected distinct
/// * `correct_items` - Ground-truth set of relevant item ids
/// * `ignore_items` - Items excluded from rank accounting (e.g. training
///   items), or `None`
///
/// Returns a score in `[0, 1]` for distinct inputs, where 1.0 means every
/// correct item sits at the top of the list. An empty `correct_items` set
/// makes the metric undefined and yields NaN; use
/// [`RankingReport::compute`] for a checked variant. A list containing
/// duplicate ids scores each occurrence.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use medir::ranking::ndcg;
///
/// let ranked = vec![10, 4, 7, 1, 9];     // Best first
/// let correct = HashSet::from([4, 9]);
/// let ignore = HashSet::from([10]);      // Consumes no rank
///
/// let score = ndcg(&ranked, &correct, Some(&ignore));
/// assert!(score > 0.87 && score < 0.88);
///
/// // Correct items on top, in any order, is a perfect ranking
/// let perfect = ndcg(&[4, 9, 7, 1], &correct, None);
/// assert!((perfect - 1.0).abs() < 1e-12);
///
/// // Undefined without ground truth
/// let empty: HashSet<i32> = HashSet::new();
/// assert!(ndcg(&ranked, &empty, None).is_nan());
/// ```
#[must_use]
pub fn ndcg<I: Eq + Hash>(
    ranked_items: &[I],
    correct_items: &HashSet<I>,
    ignore_items: Option<&HashSet<I>>,
) -> f64 {
    let mut dcg = 0.0;
    let mut left_out = 0usize;

    for (i, item) in ranked_items.iter().enumerate() {
        if ignore_items.is_some_and(|ignored| ignored.contains(item)) {
            left_out += 1;
            continue;
        }
        if !correct_items.contains(item) {
            continue;
        }
        // 1-based rank among non-ignored items
        let rank = i + 1 - left_out;
        dcg += LN_2 / ((rank + 1) as f64).ln();
    }

    dcg / ideal_dcg(correct_items.len())
}

/// Ideal DCG for a correct set of the given size.
///
/// The best achievable DCG puts all correct items at the top, so the
/// i-th correct item (0-based) lands at rank i+1 and contributes
/// `ln(2) / ln(i + 2)`. Returns 0.0 for an empty set.
///
/// # Examples
///
/// ```
/// use medir::ranking::ideal_dcg;
///
/// assert_eq!(ideal_dcg(0), 0.0);
/// assert!((ideal_dcg(1) - 1.0).abs() < 1e-12);
/// assert!((ideal_dcg(2) - 1.6309).abs() < 1e-4);
/// ```
#[must_use]
pub fn ideal_dcg(n_correct: usize) -> f64 {
    (0..n_correct).map(|i| LN_2 / ((i + 2) as f64).ln()).sum()
}

// Ranked items with the ignored ones removed, order preserved.
fn effective<'a, I: Eq + Hash>(
    ranked_items: &'a [I],
    ignore_items: Option<&'a HashSet<I>>,
) -> impl Iterator<Item = &'a I> {
    ranked_items
        .iter()
        .filter(move |item| !ignore_items.is_some_and(|ignored| ignored.contains(*item)))
}

/// Precision@K: fraction of the top-K non-ignored items that are correct.
///
/// The denominator is always `k`; a list shorter than `k` counts the
/// missing slots as misses. Returns 0.0 when `k` is 0.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use medir::ranking::precision_at_k;
///
/// let ranked = vec![1, 2, 3, 4];
/// let correct = HashSet::from([2, 4]);
///
/// assert_eq!(precision_at_k(&ranked, &correct, None, 2), 0.5);
/// assert_eq!(precision_at_k(&ranked, &correct, None, 4), 0.5);
/// ```
#[must_use]
pub fn precision_at_k<I: Eq + Hash>(
    ranked_items: &[I],
    correct_items: &HashSet<I>,
    ignore_items: Option<&HashSet<I>>,
    k: usize,
) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let hits = effective(ranked_items, ignore_items)
        .take(k)
        .filter(|item| correct_items.contains(*item))
        .count();
    hits as f64 / k as f64
}

/// Recall@K: fraction of the correct items found in the top-K non-ignored
/// items.
///
/// Returns NaN when `correct_items` is empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use medir::ranking::recall_at_k;
///
/// let ranked = vec![1, 2, 3, 4];
/// let correct = HashSet::from([2, 4]);
///
/// assert_eq!(recall_at_k(&ranked, &correct, None, 2), 0.5);
/// assert_eq!(recall_at_k(&ranked, &correct, None, 4), 1.0);
/// ```
#[must_use]
pub fn recall_at_k<I: Eq + Hash>(
    ranked_items: &[I],
    correct_items: &HashSet<I>,
    ignore_items: Option<&HashSet<I>>,
    k: usize,
) -> f64 {
    let hits = effective(ranked_items, ignore_items)
        .take(k)
        .filter(|item| correct_items.contains(*item))
        .count();
    hits as f64 / correct_items.len() as f64
}

/// Hit rate@K: whether any correct item appears in the top-K non-ignored
/// items.
///
/// Returns 1.0 on a hit, 0.0 otherwise.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use medir::ranking::hit_rate_at_k;
///
/// let ranked = vec![5, 1, 2];
/// let correct = HashSet::from([2]);
///
/// assert_eq!(hit_rate_at_k(&ranked, &correct, None, 1), 0.0);
/// assert_eq!(hit_rate_at_k(&ranked, &correct, None, 3), 1.0);
/// ```
#[must_use]
pub fn hit_rate_at_k<I: Eq + Hash>(
    ranked_items: &[I],
    correct_items: &HashSet<I>,
    ignore_items: Option<&HashSet<I>>,
    k: usize,
) -> f64 {
    let hit = effective(ranked_items, ignore_items)
        .take(k)
        .any(|item| correct_items.contains(item));
    if hit {
        1.0
    } else {
        0.0
    }
}

/// Reciprocal rank: 1/rank of the first correct item, after ignored items
/// are dropped from rank accounting.
///
/// Returns 0.0 if no correct item appears in the list.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use medir::ranking::reciprocal_rank;
///
/// let ranked = vec![5, 3, 1];
/// let correct = HashSet::from([1]);
///
/// assert!((reciprocal_rank(&ranked, &correct, None) - 1.0 / 3.0).abs() < 1e-12);
///
/// // Ignoring the top item promotes everything below it
/// let ignore = HashSet::from([5]);
/// assert!((reciprocal_rank(&ranked, &correct, Some(&ignore)) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn reciprocal_rank<I: Eq + Hash>(
    ranked_items: &[I],
    correct_items: &HashSet<I>,
    ignore_items: Option<&HashSet<I>>,
) -> f64 {
    for (i, item) in effective(ranked_items, ignore_items).enumerate() {
        if correct_items.contains(item) {
            return 1.0 / (i + 1) as f64;
        }
    }
    0.0
}

/// Average precision: mean of Precision@r over the effective ranks r where
/// a correct item appears, divided by the correct-set size.
///
/// Correct items missing from the list drag the score down through the
/// denominator. Returns NaN when `correct_items` is empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use medir::ranking::average_precision;
///
/// let ranked = vec![1, 9, 2];
/// let correct = HashSet::from([1, 2]);
///
/// // Hits at ranks 1 and 3: (1/1 + 2/3) / 2
/// let ap = average_precision(&ranked, &correct, None);
/// assert!((ap - 5.0 / 6.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn average_precision<I: Eq + Hash>(
    ranked_items: &[I],
    correct_items: &HashSet<I>,
    ignore_items: Option<&HashSet<I>>,
) -> f64 {
    let mut hits = 0usize;
    let mut precision_sum = 0.0;

    for (i, item) in effective(ranked_items, ignore_items).enumerate() {
        if correct_items.contains(item) {
            hits += 1;
            precision_sum += hits as f64 / (i + 1) as f64;
        }
    }

    precision_sum / correct_items.len() as f64
}

/// Comprehensive evaluation of one ranked list.
///
/// Bundles the standard metrics at the conventional cutoffs. Unlike the
/// free functions, construction fails loudly instead of producing NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Normalized Discounted Cumulative Gain
    pub ndcg: f64,
    /// Precision@5
    pub precision_at_5: f64,
    /// Precision@10
    pub precision_at_10: f64,
    /// Recall@10
    pub recall_at_10: f64,
    /// Reciprocal rank of the first correct item
    pub reciprocal_rank: f64,
    /// Average precision
    pub average_precision: f64,
    /// Number of non-ignored items in the ranked list
    pub n_ranked: usize,
    /// Number of correct items
    pub n_correct: usize,
}

impl RankingReport {
    /// Compute all metrics for one ranked list.
    ///
    /// # Errors
    ///
    /// Returns [`MedirError::EmptyCorrectItems`] when `correct_items` is
    /// empty, the case where every ratio metric degenerates to 0/0.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashSet;
    /// use medir::ranking::RankingReport;
    ///
    /// let ranked = vec![10, 4, 7, 1, 9];
    /// let correct = HashSet::from([4, 9]);
    /// let ignore = HashSet::from([10]);
    ///
    /// let report = RankingReport::compute(&ranked, &correct, Some(&ignore)).unwrap();
    /// assert_eq!(report.n_ranked, 4);
    /// assert_eq!(report.n_correct, 2);
    /// assert!(report.ndcg > 0.0 && report.ndcg <= 1.0);
    ///
    /// let empty: HashSet<i32> = HashSet::new();
    /// assert!(RankingReport::compute(&ranked, &empty, None).is_err());
    /// ```
    pub fn compute<I: Eq + Hash>(
        ranked_items: &[I],
        correct_items: &HashSet<I>,
        ignore_items: Option<&HashSet<I>>,
    ) -> Result<Self> {
        if correct_items.is_empty() {
            return Err(MedirError::EmptyCorrectItems {
                metric: "ranking report",
            });
        }

        Ok(Self {
            ndcg: ndcg(ranked_items, correct_items, ignore_items),
            precision_at_5: precision_at_k(ranked_items, correct_items, ignore_items, 5),
            precision_at_10: precision_at_k(ranked_items, correct_items, ignore_items, 10),
            recall_at_10: recall_at_k(ranked_items, correct_items, ignore_items, 10),
            reciprocal_rank: reciprocal_rank(ranked_items, correct_items, ignore_items),
            average_precision: average_precision(ranked_items, correct_items, ignore_items),
            n_ranked: effective(ranked_items, ignore_items).count(),
            n_correct: correct_items.len(),
        })
    }

    /// Generate a formatted report string.
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "Ranking Report (n_ranked={}, n_correct={})\n\
             ─────────────────────────────\n\
             NDCG:  {:>6.3}\n\
             P@5:   {:>6.3}\n\
             P@10:  {:>6.3}\n\
             R@10:  {:>6.3}\n\
             RR:    {:>6.3}\n\
             AP:    {:>6.3}",
            self.n_ranked,
            self.n_correct,
            self.ndcg,
            self.precision_at_5,
            self.precision_at_10,
            self.recall_at_10,
            self.reciprocal_rank,
            self.average_precision
        )
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_ranking_contract.rs"]
mod tests_ranking_contract;
