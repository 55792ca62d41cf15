//! Benchmarks for statement accumulation and finalization.

use std::hint::black_box;

use chainsql::{Query, QueryPool};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn user_lookup(query: Query) -> (String, Vec<chainsql::Bind>) {
    query
        .select(["id", "name", "email"])
        .from("users u")
        .left_join("orders o", "o.user_id = u.id")
        .where_raw("u.active = ?", true)
        .and()
        .where_in("u.role", ["admin", "editor", "viewer"])
        .order_by(["u.created_at DESC"])
        .paginate(3, 25)
        .build()
}

/// Pooled versus fresh accumulators for a typical statement.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("unpooled", |b| {
        b.iter(|| black_box(user_lookup(Query::new())))
    });

    let pool = QueryPool::new();
    group.bench_function("pooled", |b| b.iter(|| black_box(user_lookup(pool.acquire()))));

    group.finish();
}

/// Placeholder rewriting for growing marker counts.
fn bench_numbering(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbering");

    for count in [1usize, 10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut query = Query::with_capacity(count * 8, count);
                query.push("INSERT INTO t (v) VALUES ");
                for i in 0..count {
                    if i > 0 {
                        query.push(", ");
                    }
                    query.push("(").push_bind(i as i64).push(")");
                }
                black_box(query.build())
            })
        });
    }

    group.finish();
}

/// Splicing subqueries into an outer statement.
fn bench_splice(c: &mut Criterion) {
    let pool = QueryPool::new();
    c.bench_function("splice_union_4", |b| {
        b.iter(|| {
            let mut query = pool.select(["id"]).from("t0").where_raw("v = ?", 0);
            for table in ["t1", "t2", "t3"] {
                query = query.union(pool.select(["id"]).from(table).where_raw("v = ?", 1));
            }
            black_box(query.build())
        })
    });
}

criterion_group!(benches, bench_build, bench_numbering, bench_splice);
criterion_main!(benches);
