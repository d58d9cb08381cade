// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_rating::{NoAnimation, RatingConfig, StarRating};
use understory_tracking::control::Control;
use understory_tracking::types::ControlEvents;

/// Drag samples sweeping left to right across the whole row.
fn sweep(config: &RatingConfig, steps: usize) -> Vec<Point> {
    let size = config.preferred_size();
    let y = size.height * 0.5;
    (0..steps)
        .map(|i| Point::new(size.width * (i as f64) / (steps as f64), y))
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_sweep");
    for n in [6_usize, 64] {
        let config = RatingConfig::default().with_cell_count(n);
        let points = sweep(&config, 512);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("control_n{}", n), |b| {
            b.iter_batched(
                || {
                    let rating = StarRating::new(config, NoAnimation).unwrap();
                    let mut control = Control::new(rating);
                    control.add_action(ControlEvents::VALUE_CHANGED, |rating, _| {
                        black_box(rating.value());
                    });
                    control
                },
                |mut control| {
                    let start = config.spacing + 1.0;
                    control.pointer_down(Point::new(start, 1.0));
                    for pt in &points {
                        black_box(control.pointer_moved(*pt));
                    }
                    control.pointer_up(points[points.len() - 1]);
                    black_box(control.view().value());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag);
criterion_main!(benches);
