//! Benchmarks for BLS12-381 group operations, encodings and pairings

use blsforge_algorithms::ec::bls12_381::{
    multi_pairing, pairing, pairing_check, G1Affine, G1Projective, G2Affine, G2Prepared,
    G2Projective, Gt, Scalar,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::OsRng;

fn bench_scalar_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_scalar");

    let a = Scalar::random(OsRng);
    let b = Scalar::random(OsRng);

    group.bench_function("mul", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("invert", |bench| bench.iter(|| black_box(a).invert()));
    group.bench_function("from_bytes", |bench| {
        let bytes = a.to_bytes();
        bench.iter(|| Scalar::from_bytes(black_box(&bytes)))
    });

    group.finish();
}

fn bench_g1(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_g1");

    let p = G1Projective::random(OsRng);
    let q = G1Projective::random(OsRng);
    let a = G1Affine::from(q);
    let s = Scalar::random(OsRng);

    group.bench_function("add", |bench| bench.iter(|| black_box(p) + black_box(q)));
    group.bench_function("add_mixed", |bench| bench.iter(|| black_box(p) + black_box(a)));
    group.bench_function("double", |bench| bench.iter(|| black_box(p).double()));
    group.bench_function("scalar_mul", |bench| bench.iter(|| black_box(p) * black_box(s)));
    group.bench_function("to_affine", |bench| bench.iter(|| G1Affine::from(black_box(p))));

    let compressed = a.to_compressed();
    group.bench_function("to_compressed", |bench| bench.iter(|| black_box(a).to_compressed()));
    group.bench_function("from_compressed", |bench| {
        bench.iter(|| G1Affine::from_compressed(black_box(&compressed)))
    });
    group.bench_function("from_compressed_unchecked", |bench| {
        bench.iter(|| G1Affine::from_compressed_unchecked(black_box(&compressed)))
    });

    group.finish();
}

fn bench_g2(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_g2");

    let p = G2Projective::random(OsRng);
    let q = G2Projective::random(OsRng);
    let a = G2Affine::from(q);
    let s = Scalar::random(OsRng);

    group.bench_function("add", |bench| bench.iter(|| black_box(p) + black_box(q)));
    group.bench_function("double", |bench| bench.iter(|| black_box(p).double()));
    group.bench_function("scalar_mul", |bench| bench.iter(|| black_box(p) * black_box(s)));

    let compressed = a.to_compressed();
    group.bench_function("to_compressed", |bench| bench.iter(|| black_box(a).to_compressed()));
    group.bench_function("from_compressed", |bench| {
        bench.iter(|| G2Affine::from_compressed(black_box(&compressed)))
    });
    group.bench_function("from_compressed_unchecked", |bench| {
        bench.iter(|| G2Affine::from_compressed_unchecked(black_box(&compressed)))
    });

    group.finish();
}

fn bench_msm(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_msm");

    for size in [8usize, 64] {
        let points: Vec<G1Affine> = (0..size)
            .map(|_| G1Affine::from(G1Projective::random(OsRng)))
            .collect();
        let scalars: Vec<Scalar> = (0..size).map(|_| Scalar::random(OsRng)).collect();

        group.bench_with_input(BenchmarkId::new("g1_ct", size), &size, |bench, _| {
            bench.iter(|| G1Projective::msm(black_box(&points), black_box(&scalars)))
        });
        group.bench_with_input(BenchmarkId::new("g1_vartime", size), &size, |bench, _| {
            bench.iter(|| G1Projective::msm_vartime(black_box(&points), black_box(&scalars)))
        });
    }

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bls12_381_pairing");
    group.sample_size(20);

    let p = G1Affine::from(G1Projective::random(OsRng));
    let q = G2Affine::from(G2Projective::random(OsRng));

    group.bench_function("pairing", |bench| bench.iter(|| pairing(black_box(&p), black_box(&q))));
    group.bench_function("g2_prepare", |bench| bench.iter(|| G2Prepared::from(black_box(q))));

    let e = Gt::generator();
    let s = Scalar::random(OsRng);
    group.bench_function("gt_pow", |bench| bench.iter(|| black_box(e).pow(black_box(&s))));

    // e(aG1, bG2) * e(-aG1, bG2) == 1, as in a signature check
    let a = Scalar::random(OsRng);
    let b = Scalar::random(OsRng);
    let g = G1Affine::from(G1Affine::generator() * a);
    let neg_g = -g;
    let h = G2Affine::from(G2Affine::generator() * b);
    group.bench_function("pairing_check_2", |bench| {
        bench.iter(|| pairing_check(black_box(&[(g, h), (neg_g, h)])))
    });

    for size in [2usize, 4, 8] {
        let ps: Vec<G1Affine> = (0..size)
            .map(|_| G1Affine::from(G1Projective::random(OsRng)))
            .collect();
        let qs: Vec<G2Affine> = (0..size)
            .map(|_| G2Affine::from(G2Projective::random(OsRng)))
            .collect();

        group.bench_with_input(BenchmarkId::new("multi_pairing", size), &size, |bench, _| {
            bench.iter(|| multi_pairing(black_box(&ps), black_box(&qs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar_field, bench_g1, bench_g2, bench_msm, bench_pairing);
criterion_main!(benches);
