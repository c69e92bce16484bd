use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use label_encoder_random::preprocessing::{
    LabelTransformer, ManualMappingEncoder, RandomMappingEncoder,
};
use std::hint::black_box;

fn make_labels(n: usize, n_classes: u32) -> Vec<u32> {
    (0..n).map(|i| (i as u32).wrapping_mul(2654435761) % n_classes).collect()
}

fn bench_random_fit(c: &mut Criterion) {
    // Test different class counts
    for n_classes in [10u32, 1000, 100000].iter() {
        c.bench_with_input(
            BenchmarkId::new("random_fit", n_classes),
            n_classes,
            |b, &k| {
                let y = make_labels(100000, k);

                b.iter(|| {
                    let mut encoder = RandomMappingEncoder::<u32>::new();
                    encoder.fit(black_box(&y)).unwrap();
                    black_box(encoder.is_fitted());
                });
            },
        );
    }
}

fn bench_transform(c: &mut Criterion) {
    for size in [100, 10000, 1000000].iter() {
        c.bench_with_input(BenchmarkId::new("transform", size), size, |b, &n| {
            let y = make_labels(n, 50);
            let mut encoder = RandomMappingEncoder::<u32>::new();
            encoder.fit(&y).unwrap();

            b.iter(|| {
                let encoded = encoder.transform(black_box(&y)).unwrap();
                black_box(encoded);
            });
        });
    }
}

fn bench_inverse_transform(c: &mut Criterion) {
    for size in [100, 10000, 1000000].iter() {
        c.bench_with_input(
            BenchmarkId::new("inverse_transform", size),
            size,
            |b, &n| {
                let y = make_labels(n, 50);
                let mut encoder = ManualMappingEncoder::new((0..50u32).map(|l| (l, -(l as i64))));
                let codes = encoder.fit_transform(&y).unwrap();

                b.iter(|| {
                    let decoded = encoder.inverse_transform(black_box(&codes)).unwrap();
                    black_box(decoded);
                });
            },
        );
    }
}

criterion_group!(
    benches,
    bench_random_fit,
    bench_transform,
    bench_inverse_transform
);
criterion_main!(benches);
