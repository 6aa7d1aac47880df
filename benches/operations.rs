use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyed_collection::{collection, Collection, Value};

fn numbered(size: i64) -> Collection {
    (0..size).map(Value::from).collect()
}

fn nested(size: i64) -> Collection {
    let mut outer = Collection::new();
    for i in 0..size {
        outer.add(collection! { format!("id{}", i) => i, "qty" => i % 7 });
    }
    outer
}

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut collection = Collection::new();
                for i in 0..size {
                    collection.add(black_box(i));
                }
                collection
            })
        });
    }
    group.finish();
}

fn benchmark_add_with_key(c: &mut Criterion) {
    c.bench_function("add_with_key_100", |b| {
        b.iter(|| {
            let mut collection = Collection::new();
            for i in 0..100 {
                let _ = collection.add_with_key(black_box(i), format!("key{}", i));
            }
            collection
        })
    });
}

fn benchmark_drop_by_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("drop_by_value");

    for size in [10, 100, 1000].iter() {
        let collection = numbered(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &collection, |b, base| {
            b.iter(|| {
                let mut collection = base.clone();
                let _ = collection.drop(black_box("missing-key-so-scan-values"));
                collection
            })
        });
    }
    group.finish();
}

fn benchmark_transforms(c: &mut Criterion) {
    let collection = numbered(500);

    c.bench_function("reverse_500", |b| b.iter(|| black_box(&collection).reverse()));
    c.bench_function("map_500", |b| {
        b.iter(|| {
            black_box(&collection).map(|value, _| Value::from(value.as_i64().unwrap_or(0) + 1))
        })
    });
    c.bench_function("filter_500", |b| {
        b.iter(|| black_box(&collection).filter(|value| value.as_i64().is_some_and(|n| n % 2 == 0)))
    });
}

fn benchmark_sum(c: &mut Criterion) {
    let flat = numbered(1000);
    let deep = nested(1000);

    c.bench_function("sum_1000", |b| b.iter(|| black_box(&flat).sum()));
    c.bench_function("sum_by_1000", |b| b.iter(|| black_box(&deep).sum_by("qty")));
}

fn benchmark_flatten(c: &mut Criterion) {
    let deep = nested(200);

    c.bench_function("flatten_200", |b| b.iter(|| black_box(&deep).flatten()));
}

fn benchmark_merge(c: &mut Criterion) {
    let left = nested(100).flatten();
    let right = nested(200).flatten();

    c.bench_function("merge_flattened", |b| {
        b.iter(|| {
            let mut merged = left.clone();
            merged.merge(black_box(&right));
            merged
        })
    });
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_add_with_key,
    benchmark_drop_by_value,
    benchmark_transforms,
    benchmark_sum,
    benchmark_flatten,
    benchmark_merge
);
criterion_main!(benches);
