use criterion::*;
use std::hint::black_box;

use simstate::{ComponentID, StateManager};

mod common;
use common::*;

fn register_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("register");

    group.bench_function("components_64", |b| {
        b.iter_batched(
            StateManager::new,
            |mut state| {
                let ids = register_components(&mut state);
                black_box((state, ids));
            },
            BatchSize::SmallInput,
        );
    });

    for count in [ARCHETYPES_SMALL, ARCHETYPES_LARGE] {
        group.bench_function(format!("archetypes_{count}_width_8"), |b| {
            b.iter_batched(
                || {
                    let mut state = StateManager::new();
                    let components = register_components(&mut state);
                    (state, components)
                },
                |(mut state, components)| {
                    for i in 0..count {
                        let members: Vec<ComponentID> = (0..8)
                            .map(|k| components[(i as usize + k) % components.len()])
                            .collect();
                        let id = state.alloc_archetype_id();
                        state.register_archetype(id, &members).unwrap();
                    }
                    black_box(state);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, register_benchmark);
criterion_main!(benches);
