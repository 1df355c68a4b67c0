use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mazedelve::generate_maze;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_maze");
    for side in [5usize, 10, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| generate_maze(&mut rng, black_box(side), black_box(side)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
