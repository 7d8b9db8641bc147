//! Criterion benchmarks for [`History`] snapshot operations.
//!
//! Every editor keystroke clones the whole configuration into the undo
//! stack, so `record` has to stay cheap even for configurations with large
//! content maps.
//!
//! Run with:
//! ```bash
//! cargo bench --package sitecraft-core --bench history_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sitecraft_core::{Configuration, History, TemplateId, HISTORY_LIMIT};

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Creates a configuration with `n` text entries and `n / 4` images.
fn config_with_n_fields(n: usize) -> Configuration {
    let mut cfg = Configuration::defaults_for(TemplateId::Realtor);
    for i in 0..n {
        cfg.content
            .text
            .insert(format!("section.field{i}"), format!("value number {i}"));
    }
    for i in 0..n / 4 {
        cfg.content
            .images
            .insert(format!("gallery.image{i}"), format!("https://cdn.example/{i}.png"));
    }
    cfg
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("history_record");
    for n in [8usize, 64, 512] {
        let cfg = config_with_n_fields(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cfg, |b, cfg| {
            let mut history = History::new();
            b.iter(|| history.record(black_box(cfg.clone())));
        });
    }
    group.finish();
}

fn bench_undo_redo_cycle(c: &mut Criterion) {
    let cfg = config_with_n_fields(64);
    c.bench_function("history_full_undo_redo_cycle", |b| {
        b.iter(|| {
            let mut history = History::new();
            let mut current = cfg.clone();
            for i in 0..HISTORY_LIMIT {
                history.record(current.clone());
                current.content.text.insert("hero.title".into(), i.to_string());
            }
            while history.undo(&mut current) {}
            while history.redo(&mut current) {}
            black_box(current)
        });
    });
}

criterion_group!(benches, bench_record, bench_undo_redo_cycle);
criterion_main!(benches);
