use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use medir::ranking::{ndcg, RankingReport};
use std::collections::HashSet;

fn generate_ranking(n: usize) -> (Vec<u64>, HashSet<u64>, HashSet<u64>) {
    // Coprime stride gives a deterministic pseudo-shuffle of 0..n
    let ranked: Vec<u64> = (0..n as u64).map(|i| (i * 7919) % n as u64).collect();
    let correct: HashSet<u64> = (0..n as u64).step_by(10).collect();
    let ignore: HashSet<u64> = (0..n as u64).step_by(13).collect();
    (ranked, correct, ignore)
}

fn bench_ndcg(c: &mut Criterion) {
    let mut group = c.benchmark_group("ndcg");

    for size in [100, 1_000, 10_000].iter() {
        let (ranked, correct, _) = generate_ranking(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| ndcg(black_box(&ranked), black_box(&correct), None));
        });
    }

    group.finish();
}

fn bench_ndcg_with_ignore(c: &mut Criterion) {
    let mut group = c.benchmark_group("ndcg_ignore");

    for size in [100, 1_000, 10_000].iter() {
        let (ranked, correct, ignore) = generate_ranking(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                ndcg(
                    black_box(&ranked),
                    black_box(&correct),
                    Some(black_box(&ignore)),
                )
            });
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking_report");
    group.sample_size(50); // Reduce samples for large datasets

    for size in [100, 1_000, 10_000].iter() {
        let (ranked, correct, ignore) = generate_ranking(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                RankingReport::compute(
                    black_box(&ranked),
                    black_box(&correct),
                    Some(black_box(&ignore)),
                )
                .expect("should succeed")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_ndcg, bench_ndcg_with_ignore, bench_report);
criterion_main!(benches);
