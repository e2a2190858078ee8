use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use naming::{make_unique, normalize, Alignment, NamingConfig, Normalizer};

const TITLE: &str = "220 BEA EconData Employment by Industry and State, 2010-2015 (US$ millions)";

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Bytes(TITLE.len() as u64));

    let config = NamingConfig::default();
    group.bench_function("compile_per_call", |b| {
        b.iter(|| normalize(black_box(TITLE), black_box(&config)).expect("normalize"))
    });

    for alignment in [Alignment::Left, Alignment::Right, Alignment::Edge] {
        let normalizer = Normalizer::new(&NamingConfig {
            alignment,
            ..Default::default()
        })
        .expect("valid config");
        group.bench_function(format!("precompiled_{alignment}"), |b| {
            b.iter(|| normalizer.normalize(black_box(TITLE)).expect("normalize"))
        });
    }

    group.finish();
}

fn bench_make_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_unique");

    for size in [16usize, 256, 4096].iter() {
        let seeded: HashSet<String> = (0..*size).map(|i| format!("table_{i}")).collect();
        group.bench_function(format!("existing_{size}"), |b| {
            b.iter_batched(
                || seeded.clone(),
                |mut existing| make_unique(black_box("table"), &mut existing),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_make_unique);
criterion_main!(benches);
