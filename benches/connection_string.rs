//! Benchmarks for connection string rendering.

use criterion::{Criterion, criterion_group, criterion_main};
use rdbal::ConnectionParams;
use rdbal::SqlAnywhereConfig;
use std::hint::black_box;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("connection_string");

    let host = ConnectionParams::new()
        .host("myhost")
        .server("srv1")
        .dbname("mydb")
        .user("u")
        .password("p");

    let dsn = ConnectionParams::new()
        .dsn("MyDataSource")
        .dbname("mydb")
        .user("u")
        .option("CharSet", "utf8")
        .option("AutoStop", "no")
        .option("Idle", "60");

    group.bench_function("resolve_and_render_host", |b| {
        b.iter(|| {
            black_box(
                SqlAnywhereConfig::from_params(black_box(&host))
                    .map(|c| c.to_connection_string()),
            )
        })
    });

    group.bench_function("resolve_and_render_dsn_with_options", |b| {
        b.iter(|| {
            black_box(
                SqlAnywhereConfig::from_params(black_box(&dsn)).map(|c| c.to_connection_string()),
            )
        })
    });

    let resolved = SqlAnywhereConfig::from_params(&dsn).unwrap();
    group.bench_function("render_only", |b| {
        b.iter(|| black_box(resolved.to_connection_string()))
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
