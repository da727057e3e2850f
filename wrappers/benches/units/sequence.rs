use colljson::{HashMultiset, ImmutableList, ImmutableSortedSet, TreeMultiset};
use criterion::{criterion_group, Criterion};
use std::time::Duration;

fn write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("** colljson sequence kinds **");
    group
        .measurement_time(Duration::from_secs(3))
        .sample_size(10);

    let items = (0..1000).map(|_| rand::random::<u32>() % 256).collect::<Vec<_>>();

    let list = ImmutableList::of(items.iter().copied());
    let list_json = serde_json::to_string(&list).unwrap();
    group.bench_function(" list write ", |b| {
        b.iter(|| serde_json::to_string(&list).unwrap())
    });
    group.bench_function(" list read ", |b| {
        b.iter(|| serde_json::from_str::<ImmutableList<u32>>(&list_json).unwrap())
    });

    group.bench_function(" sorted set read ", |b| {
        b.iter(|| serde_json::from_str::<ImmutableSortedSet<u32>>(&list_json).unwrap())
    });

    let hm: HashMultiset<u32> = items.iter().copied().collect();
    group.bench_function(" hash multiset write ", |b| {
        b.iter(|| serde_json::to_string(&hm).unwrap())
    });
    group.bench_function(" tree multiset read ", |b| {
        b.iter(|| serde_json::from_str::<TreeMultiset<u32>>(&list_json).unwrap())
    });

    group.finish();
}

criterion_group!(benches, write_read);
