//! R-tree benchmarks: insertion with splits, window queries, point
//! queries, and k-nearest-neighbor search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tridex::{Point, RTree, Rect};

fn scattered_rects(count: usize, seed: u64) -> Vec<Rect> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let x = (state % 10_000) as f64;
            let y = ((state >> 16) % 10_000) as f64;
            let w = ((state >> 32) % 50) as f64;
            let h = ((state >> 40) % 50) as f64;
            Rect::new(x, y, x + w, y + h)
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_insert");

    for count in [1_000usize, 10_000] {
        let rects = scattered_rects(count, 0x243F6A8885A308D3);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("scattered", count), &count, |b, _| {
            b.iter(|| {
                let mut tree = RTree::new(4, 9);
                for (i, &r) in rects.iter().enumerate() {
                    tree.insert(r, i);
                }
                tree
            });
        });
    }
    group.finish();
}

fn bench_window_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_search");

    let rects = scattered_rects(10_000, 0x13198A2E03707344);
    let mut tree = RTree::new(4, 9);
    for (i, &r) in rects.iter().enumerate() {
        tree.insert(r, i);
    }

    for extent in [100.0f64, 1_000.0] {
        group.bench_with_input(
            BenchmarkId::new("window", extent as u64),
            &extent,
            |b, &extent| {
                let mut offset = 0.0;
                b.iter(|| {
                    offset = (offset + 733.0) % (10_000.0 - extent);
                    black_box(
                        tree.search(Rect::new(offset, offset, offset + extent, offset + extent))
                            .len(),
                    )
                });
            },
        );
    }

    group.bench_function("point", |b| {
        let mut offset = 0.0;
        b.iter(|| {
            offset = (offset + 733.0) % 10_000.0;
            black_box(tree.search_point(Point::new(offset, offset)).len())
        });
    });
    group.finish();
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_nearest_neighbor");

    let rects = scattered_rects(10_000, 0xA4093822299F31D0);
    let mut tree = RTree::new(4, 9);
    for (i, &r) in rects.iter().enumerate() {
        tree.insert(r, i);
    }

    for k in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(k as u64));
        group.bench_with_input(BenchmarkId::new("k", k), &k, |b, &k| {
            let mut offset = 0.0;
            b.iter(|| {
                offset = (offset + 733.0) % 10_000.0;
                black_box(tree.nearest_neighbor(Point::new(offset, offset), k).len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_window_search, bench_nearest_neighbor);
criterion_main!(benches);
