//! Criterion micro-benchmarks for pooled string storage.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strand_bench::sample_words;
use strand_pool::{PoolStack, StringPool};

fn bench_pool_add(c: &mut Criterion) {
    let words = sample_words(1000, 42);

    c.bench_function("pool/add_1000_words", |b| {
        b.iter(|| {
            let mut pool = StringPool::new();
            for word in &words {
                black_box(pool.add(black_box(word)));
            }
            black_box(pool.block_count())
        })
    });

    c.bench_function("pool/add_1000_words_vec_baseline", |b| {
        b.iter(|| {
            let mut held: Vec<Vec<u8>> = Vec::new();
            for word in &words {
                held.push(black_box(word).clone());
            }
            black_box(held.len())
        })
    });
}

fn bench_stack_cycle(c: &mut Criterion) {
    let words = sample_words(200, 7);

    c.bench_function("pool/push_add_200_pop", |b| {
        let mut stack = PoolStack::new();
        // Warm the block list so steady-state cycles reuse storage.
        stack.push();
        for word in &words {
            stack.add(word);
        }
        stack.pop().unwrap();

        b.iter(|| {
            stack.push();
            for word in &words {
                black_box(stack.add(black_box(word)));
            }
            stack.pop().unwrap();
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let words = sample_words(1000, 9);
    let mut pool = StringPool::new();
    let handles: Vec<_> = words.iter().map(|w| pool.add(w)).collect();

    c.bench_function("pool/get_1000_handles", |b| {
        b.iter(|| {
            let mut total = 0;
            for handle in &handles {
                total += pool.get(black_box(*handle)).len();
            }
            black_box(total)
        })
    });
}

criterion_group!(benches, bench_pool_add, bench_stack_cycle, bench_resolve);
criterion_main!(benches);
