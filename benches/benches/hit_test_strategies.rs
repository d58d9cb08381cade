// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_rating::{CellLayout, RatingConfig};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Pointer samples spread across the control, including gaps and a margin outside it.
fn gen_points(config: &RatingConfig, count: usize) -> Vec<Point> {
    let size = config.preferred_size();
    let mut rng = Rng::new(0x5EED_57A2_0000_0001);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * (size.width + 20.0) - 10.0;
            let y = rng.next_f64() * (size.height + 4.0) - 2.0;
            Point::new(x, y)
        })
        .collect()
}

const SAMPLES: usize = 1024;

fn bench_strategies(c: &mut Criterion) {
    for n in [6_usize, 64, 1024] {
        let config = RatingConfig::default().with_cell_count(n);
        let layout = CellLayout::new(&config);
        let points = gen_points(&config, SAMPLES);

        let mut group = c.benchmark_group(format!("hit_test_n{}", n));
        group.throughput(Throughput::Elements(SAMPLES as u64));
        group.bench_function("scan", |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for pt in &points {
                    if layout.hit_test_scan(black_box(*pt)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits);
            });
        });
        group.bench_function("pitch", |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for pt in &points {
                    if layout.hit_test_pitch(black_box(*pt)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits);
            });
        });
        group.finish();
    }
}

fn bench_layout_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_build");
    for n in [6_usize, 64, 1024] {
        let config = RatingConfig::default().with_cell_count(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("cells_n{}", n), |b| {
            b.iter(|| black_box(CellLayout::new(black_box(&config))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_layout_build);
criterion_main!(benches);
