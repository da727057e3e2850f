use colljson::{Described, ImmutableMultiset, Jsonb, ValueEnDe};
use criterion::{criterion_group, Criterion};
use std::time::Duration;

fn lookup_and_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("** colljson registry **");
    group
        .measurement_time(Duration::from_secs(3))
        .sample_size(10);

    let jsonb = Jsonb::new();
    let desc = ImmutableMultiset::<String>::descriptor();

    group.bench_function(" cached lookup ", |b| {
        b.iter(|| jsonb.registry().lookup(&desc).unwrap())
    });

    let t = jsonb.type_of::<ImmutableMultiset<String>>().unwrap();
    let m = ImmutableMultiset::of((0..500).map(|i| format!("v{}", i % 50)));
    group.bench_function(" typed write ", |b| b.iter(|| t.to_json(&m).unwrap()));

    let bytes = m.encode();
    group.bench_function(" bytes read ", |b| {
        b.iter(|| <ImmutableMultiset<String> as ValueEnDe>::decode(&bytes).unwrap())
    });

    group.finish();
}

criterion_group!(benches, lookup_and_codec);
