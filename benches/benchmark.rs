use boxscore_core::{
    calculate_win_prob, compose, decompose_points, quarter_breakdown, simulate_series, synthesize, BoxScoreConfig,
    RatingsSource, RatingsTable, SynthConfig, TeamSheet,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_synthesize(c: &mut Criterion) {
    let table = RatingsTable::builtin();
    let config = SynthConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("synthesize", |b| {
        b.iter(|| synthesize(black_box("Boston Celtics"), black_box("Miami Heat"), table, &config, &mut rng))
    });
}

fn bench_win_prob(c: &mut Criterion) {
    let table = RatingsTable::builtin();
    let a = table.ratings_for("Denver Nuggets");
    let b = table.ratings_for("Phoenix Suns");
    let config = SynthConfig::default();

    c.bench_function("calculate_win_prob", |bench| {
        bench.iter(|| calculate_win_prob(black_box(&a), black_box(&b), &config))
    });
}

fn bench_primitives(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("quarter_breakdown", |b| {
        b.iter(|| quarter_breakdown(black_box(104), 4, 10, &mut rng))
    });

    c.bench_function("decompose_points", |b| b.iter(|| decompose_points(black_box(29), 10, &mut rng)));
}

fn bench_compose(c: &mut Criterion) {
    let config = BoxScoreConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    c.bench_function("compose_box_score", |b| {
        b.iter(|| {
            compose(
                TeamSheet::new(black_box("Alpha"), 112),
                TeamSheet::new(black_box("Beta"), 104),
                &config,
                &mut rng,
            )
        })
    });
}

fn bench_series(c: &mut Criterion) {
    let table = RatingsTable::builtin();
    let config = SynthConfig::default();

    c.bench_function("series_1000_games", |b| {
        b.iter(|| simulate_series("Boston Celtics", "Detroit Pistons", 1000, Some(42), table, &config))
    });
}

criterion_group!(
    benches,
    bench_synthesize,
    bench_win_prob,
    bench_primitives,
    bench_compose,
    bench_series,
);
criterion_main!(benches);
