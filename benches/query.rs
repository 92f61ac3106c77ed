use criterion::*;
use std::hint::black_box;

mod common;
use common::*;

fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for width in [1usize, 4, 8] {
        group.bench_function(format!("compile_{ARCHETYPES_LARGE}_archetypes_request_{width}"), |b| {
            b.iter_batched(
                || setup_state(ARCHETYPES_LARGE, 8),
                |(mut state, components)| {
                    let request = &components[..width];
                    let q = state.make_query(request).unwrap();
                    black_box((state, q));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("decode_matches", |b| {
        let (mut state, components) = setup_state(ARCHETYPES_LARGE, 8);
        let q = state.make_query(&components[..4]).unwrap();

        b.iter(|| {
            let total: u64 = state
                .query_matches(&q)
                .map(|m| m.archetype_index as u64 + m.columns.iter().map(|&c| c as u64).sum::<u64>())
                .sum();
            black_box(total);
        });
    });

    group.finish();
}

criterion_group!(benches, query_benchmark);
criterion_main!(benches);
