use colljson::{ImmutableBiMap, ImmutableMap};
use criterion::{criterion_group, Criterion};
use std::time::Duration;

fn write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("** colljson map kinds **");
    group
        .measurement_time(Duration::from_secs(3))
        .sample_size(10);

    let m = ImmutableMap::of((0..1000u64).map(|i| (format!("key-{}", i), i))).unwrap();
    let json = serde_json::to_string(&m).unwrap();

    group.bench_function(" map write ", |b| {
        b.iter(|| serde_json::to_string(&m).unwrap())
    });
    group.bench_function(" map read ", |b| {
        b.iter(|| serde_json::from_str::<ImmutableMap<String, u64>>(&json).unwrap())
    });
    group.bench_function(" bimap read ", |b| {
        b.iter(|| serde_json::from_str::<ImmutableBiMap<String, u64>>(&json).unwrap())
    });

    group.finish();
}

criterion_group!(benches, write_read);
