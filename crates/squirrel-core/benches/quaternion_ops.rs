use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec3};
use squirrel_core::{Quaternion, SimdQuaternion, Transform};

fn benchmark_product(c: &mut Criterion) {
    let (a, b) = (
        Quaternion::from_euler(0.1, 0.2, 0.3),
        Quaternion::from_euler(-0.4, 0.5, 1.1),
    );
    let (sa, sb) = (SimdQuaternion::from(a), SimdQuaternion::from(b));
    let (ga, gb) = (Quat::from(a), Quat::from(b));

    let mut group = c.benchmark_group("quaternion_product");
    group.bench_function("scalar", |bench| bench.iter(|| black_box(a) * black_box(b)));
    group.bench_function("simd", |bench| bench.iter(|| black_box(sa) * black_box(sb)));
    group.bench_function("glam", |bench| bench.iter(|| black_box(ga) * black_box(gb)));
    group.finish();
}

fn benchmark_normalize(c: &mut Criterion) {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let sq = SimdQuaternion::from(q);
    let gq = Quat::from(q);

    let mut group = c.benchmark_group("quaternion_normalize");
    group.bench_function("scalar", |bench| bench.iter(|| black_box(q).normalized()));
    group.bench_function("simd", |bench| bench.iter(|| black_box(sq).normalized()));
    group.bench_function("glam", |bench| bench.iter(|| black_box(gq).normalize()));
    group.finish();
}

fn benchmark_rotate_vector(c: &mut Criterion) {
    let q = Quaternion::from_axis_angle(1.0, 2.0, 3.0, 4.0);
    let sq = SimdQuaternion::from(q);
    let gq = Quat::from(q);
    let input: Vec<Vec3> = (0..1000)
        .map(|i| {
            let f = i as f32 * 0.01;
            Vec3::new(f, f.sin(), f.cos())
        })
        .collect();

    let mut group = c.benchmark_group("quaternion_rotate_vector");
    group.bench_function("scalar", |bench| {
        bench.iter(|| {
            let rotated: Vec<Vec3> = input.iter().map(|&v| q.rotate_vector(black_box(v))).collect();
            black_box(rotated);
        });
    });
    group.bench_function("simd", |bench| {
        bench.iter(|| {
            let rotated: Vec<Vec3> = input.iter().map(|&v| sq.rotate_vector(black_box(v))).collect();
            black_box(rotated);
        });
    });
    group.bench_function("glam", |bench| {
        bench.iter(|| {
            let rotated: Vec<Vec3> = input.iter().map(|&v| gq * black_box(v)).collect();
            black_box(rotated);
        });
    });
    group.finish();
}

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("quaternion_from_euler");
    group.bench_function("scalar", |bench| {
        bench.iter(|| Quaternion::from_euler(black_box(1.0), black_box(2.0), black_box(3.0)));
    });
    group.bench_function("simd", |bench| {
        bench.iter(|| SimdQuaternion::from_euler(black_box(1.0), black_box(2.0), black_box(3.0)));
    });
    group.bench_function("glam", |bench| {
        bench.iter(|| {
            Quat::from_euler(glam::EulerRot::ZYX, black_box(3.0), black_box(2.0), black_box(1.0))
        });
    });
    group.finish();

    let mut group = c.benchmark_group("quaternion_from_axis_angle");
    group.bench_function("scalar", |bench| {
        bench.iter(|| Quaternion::from_axis_angle(black_box(1.0), black_box(2.0), black_box(3.0), black_box(4.0)));
    });
    group.bench_function("simd", |bench| {
        bench.iter(|| SimdQuaternion::from_axis_angle(black_box(1.0), black_box(2.0), black_box(3.0), black_box(4.0)));
    });
    group.bench_function("glam", |bench| {
        bench.iter(|| Quat::from_axis_angle(black_box(Vec3::new(1.0, 2.0, 3.0)).normalize(), black_box(4.0)));
    });
    group.finish();
}

fn benchmark_transform_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_matrix");
    group.bench_function("cached", |bench| {
        let mut transform = Transform::new();
        transform.rotate_axis_angle(Vec3::Y, 30.0);
        bench.iter(|| black_box(transform.matrix()));
    });
    group.bench_function("rebuild", |bench| {
        let mut transform = Transform::new();
        bench.iter(|| {
            transform.translate(black_box(Vec3::X));
            black_box(transform.matrix())
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_product,
    benchmark_normalize,
    benchmark_rotate_vector,
    benchmark_construction,
    benchmark_transform_matrix
);
criterion_main!(benches);
