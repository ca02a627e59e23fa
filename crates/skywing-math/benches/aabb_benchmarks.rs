use criterion::{Criterion, black_box, criterion_group, criterion_main};
use skywing_math::*;

fn bench_calculate_intercept_hit(c: &mut Criterion) {
    let bb = black_box(AxisAlignedBB::one());
    let from = black_box(Vector3::new(-5.0, 0.5, 0.5));
    let to = black_box(Vector3::new(5.0, 0.5, 0.5));
    c.bench_function("calculate_intercept_hit", |bencher| {
        bencher.iter(|| black_box(bb.calculate_intercept(from, to).map(|hit| hit.hit_face)))
    });
}

fn bench_calculate_intercept_miss(c: &mut Criterion) {
    let bb = black_box(AxisAlignedBB::one());
    let from = black_box(Vector3::new(-5.0, 5.0, 5.0));
    let to = black_box(Vector3::new(5.0, 5.0, 5.0));
    c.bench_function("calculate_intercept_miss", |bencher| {
        bencher.iter(|| black_box(bb.calculate_intercept(from, to).is_none()))
    });
}

fn bench_swept_offsets(c: &mut Criterion) {
    let moving = black_box(AxisAlignedBB::one());
    let obstacles: Vec<AxisAlignedBB> = (0..64)
        .map(|i| {
            let x = (i % 8) as f32 * 2.0 + 2.0;
            let y = (i / 8) as f32 - 4.0;
            AxisAlignedBB::one().offset_copy(x, y, 0.0)
        })
        .collect();
    c.bench_function("swept_offsets_64_obstacles", |bencher| {
        bencher.iter(|| {
            let mut dy = black_box(-3.0);
            for obstacle in &obstacles {
                dy = obstacle.calculate_y_offset(&moving, dy);
            }
            let mut dx = black_box(20.0);
            for obstacle in &obstacles {
                dx = obstacle.calculate_x_offset(&moving, dx);
            }
            let mut dz = black_box(1.0);
            for obstacle in &obstacles {
                dz = obstacle.calculate_z_offset(&moving, dz);
            }
            black_box((dx, dy, dz))
        })
    });
}

fn bench_intersects(c: &mut Criterion) {
    let a = black_box(AxisAlignedBB::one());
    let b = black_box(AxisAlignedBB::one().offset_copy(0.5, 0.5, 0.5));
    c.bench_function("intersects", |bencher| {
        bencher.iter(|| black_box(a.intersects(&b)))
    });
}

criterion_group!(
    benches,
    bench_calculate_intercept_hit,
    bench_calculate_intercept_miss,
    bench_swept_offsets,
    bench_intersects,
);
criterion_main!(benches);
