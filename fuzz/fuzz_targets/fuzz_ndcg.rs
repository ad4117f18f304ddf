#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    // Fuzz ranking metrics with arbitrary id lists and sets
    // Targets: left-out rank accounting, 0/0 handling, duplicate ids
    if data.len() < 3 {
        return;
    }

    let (head, tail) = data.split_at(2);
    let n_correct = head[0] as usize % 16;
    let n_ignore = head[1] as usize % 16;

    let ids: Vec<u16> = tail
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let correct: HashSet<u16> = ids.iter().take(n_correct).copied().collect();
    let ignore: HashSet<u16> = ids.iter().skip(n_correct).take(n_ignore).copied().collect();

    let score = medir::ranking::ndcg(&ids, &correct, Some(&ignore));
    if correct.is_empty() {
        assert!(score.is_nan());
    } else {
        assert!(score >= 0.0);
        assert!(score.is_finite());
    }

    if let Ok(report) = medir::ranking::RankingReport::compute(&ids, &correct, Some(&ignore)) {
        // Duplicate ids can push ndcg and recall above 1.0; lower bounds still hold
        assert!(report.ndcg >= 0.0);
        assert!(report.recall_at_10 >= 0.0);
        assert!((0.0..=1.0).contains(&report.precision_at_10));
        assert!((0.0..=1.0).contains(&report.reciprocal_rank));
    }
});
