use closed_fences::{core::math::point, fence::Fence};
use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use num_bigint::BigInt;
use test_fences::*;

fn bench_validate(b: &mut Bencher, fence: &Fence<i64>) {
    b.iter(|| {
        fence.validate();
    })
}

fn bench_visible_edges(b: &mut Bencher, fence: &Fence<i64>) {
    let eye = point(fence.vertex_count() as i64 / 4, -2);
    b.iter(|| {
        fence.visible_edges(&eye);
    })
}

fn bench_visible_edges_big_int(b: &mut Bencher, fence: &Fence<BigInt>) {
    let eye = point(BigInt::from(fence.vertex_count() / 4), BigInt::from(-2));
    b.iter(|| {
        fence.visible_edges(&eye);
    })
}

fn validate_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_fence");
    let tooth_counts = &[5, 50, 250];
    for &i in tooth_counts {
        group.bench_with_input(BenchmarkId::new("comb", i), &i, |b, i| {
            bench_validate(b, &comb(*i))
        });
    }

    group.finish();
}

fn visible_edges_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_edges");
    let tooth_counts = &[5, 25, 50];
    for &i in tooth_counts {
        group.bench_with_input(BenchmarkId::new("comb_i64", i), &i, |b, i| {
            bench_visible_edges(b, &comb(*i))
        });
        group.bench_with_input(BenchmarkId::new("comb_big_int", i), &i, |b, i| {
            bench_visible_edges_big_int(b, &comb(*i))
        });
    }

    group.finish();
}

criterion_group!(fence_benches, validate_group, visible_edges_group,);
criterion_main!(fence_benches);
