#[macro_use]
extern crate criterion;

use criterion::{black_box, Bencher, Criterion};
use rand::prelude::*;

use ranked_set::SortedSet;

fn populated(size: u64, seed: u64) -> SortedSet<u64, u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut set = SortedSet::with_seed(seed);
    for member in 0..size {
        set.add(rng.gen(), member);
    }
    set
}

fn bench_add(b: &mut Bencher, base: u64, inserts: u64) {
    let mut set = populated(base, 1);
    let mut rng = StdRng::seed_from_u64(2);

    b.iter(|| {
        for _ in 0..inserts {
            set.add(rng.gen(), rng.gen_range(0..base + inserts));
        }
    });
}

fn bench_rank(b: &mut Bencher, size: u64) {
    let set = populated(size, 3);
    let mut rng = StdRng::seed_from_u64(4);

    b.iter(|| {
        let member = rng.gen_range(0..size);
        black_box(set.rank(&member));
    });
}

fn bench_range(b: &mut Bencher, size: u64, window: usize) {
    let set = populated(size, 5);
    let mut rng = StdRng::seed_from_u64(6);

    b.iter(|| {
        let from = rng.gen_range(1..=size as usize);
        black_box(set.range(from, from + window - 1));
    });
}

fn benchmark(c: &mut Criterion) {
    c.bench_function("add_0_1000", |b| {
        bench_add(b, 0, 1000);
    });
    c.bench_function("add_100000_20", |b| {
        bench_add(b, 100_000, 20);
    });
    c.bench_function("rank_1000", |b| {
        bench_rank(b, 1000);
    });
    c.bench_function("rank_100000", |b| {
        bench_rank(b, 100_000);
    });
    c.bench_function("range_100000_100", |b| {
        bench_range(b, 100_000, 100);
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
