// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_combobox::interaction::{ContainerEvent, TargetKind};
use understory_combobox::{SelectEngine, SelectOption, SelectionValue, visible_options};

fn catalog(len: usize) -> Vec<SelectOption> {
    (0..len)
        .map(|i| SelectOption::new(format!("option {i:05}"), i as f64))
        .collect()
}

fn bench_filter_by_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("combobox/filter_query");

    // Empty query is a straight copy; a selective query exercises substring matching.
    for len in [128usize, 1_024, 8_192] {
        let options = catalog(len);
        let selection = SelectionValue::Single(None);
        group.throughput(Throughput::Elements(len as u64));

        for query in ["", "7", "option 0001"] {
            group.bench_with_input(
                BenchmarkId::new(format!("query={query:?}"), len),
                &options,
                |b, options| {
                    b.iter(|| black_box(visible_options(options, query, &selection).len()));
                },
            );
        }
    }

    group.finish();
}

fn bench_filter_multi_exclusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("combobox/filter_multi_exclusion");

    // Hypothesis: hashed exclusion keeps this linear in catalog + selection size.
    for len in [128usize, 1_024, 8_192] {
        let options = catalog(len);
        group.throughput(Throughput::Elements(len as u64));

        for selected_share in [0usize, 2, 1] {
            let selected = if selected_share == 0 {
                Vec::new()
            } else {
                options.iter().step_by(selected_share).cloned().collect()
            };
            let selection = SelectionValue::Multi(Some(selected));
            group.bench_with_input(
                BenchmarkId::new(format!("every_{selected_share}"), len),
                &options,
                |b, options| {
                    b.iter(|| black_box(visible_options(options, "", &selection).len()));
                },
            );
        }
    }

    group.finish();
}

fn bench_pick_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("combobox/pick_cycle");

    // Open, type, pick, blur; repeat until everything is selected.
    for len in [32usize, 256] {
        let options = catalog(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("multi", len), &options, |b, options| {
            b.iter_batched(
                || {
                    SelectEngine::builder(options.clone())
                        .multi(true)
                        .build()
                        .unwrap()
                },
                |mut engine| {
                    for option in options {
                        engine.activate_container(ContainerEvent::new(TargetKind::Other));
                        engine.change_query(&option.label()[7..]);
                        engine.mouse_down_menu();
                        engine.activate_option(option);
                        engine.blur();
                    }
                    black_box(engine.view().is_all_selected);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_by_query,
    bench_filter_multi_exclusion,
    bench_pick_cycle
);
criterion_main!(benches);
