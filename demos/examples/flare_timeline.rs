// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flare timelines on a host clock.
//!
//! Selects a star, then samples the flare every 50 ms the way a host's frame
//! loop would, printing the scale and the transform applied to the cell.
//!
//! Run:
//! - `cargo run -p understory_demos --example flare_timeline`

use std::time::Duration;

use understory_rating::{FlareTimeline, Flares, RatingConfig, RatingControl, StarRating};
use understory_tracking::control::Control;

fn main() {
    let rating = StarRating::new(RatingConfig::default(), Flares::new()).unwrap();
    let mut control: RatingControl = Control::new(rating);

    let third = control.view().cell(3).unwrap().anchor();
    control.pointer_down(third);
    control.pointer_up(third);

    // The host would hand these phases to its own animation primitive.
    let bounds = control.view().cell(3).unwrap().bounds();
    let timeline = FlareTimeline::new(control.view().config().flare, bounds);
    println!("== Phases ==");
    for phase in timeline.phases() {
        println!("  -> {:.1}x over {:?}", phase.to_scale, phase.duration);
    }

    println!("== Frames ==");
    let mut peak = 1.0_f64;
    for frame in 0..=9_u64 {
        let now = Duration::from_millis(frame * 50);
        let running = control.view_mut().animator_mut().tick(now);
        let flares = control.view().animator();
        let scale = flares.scale(3);
        peak = peak.max(scale);
        println!(
            "  t={:>3}ms running={} scale={:.3} transform={:?}",
            now.as_millis(),
            running,
            scale,
            flares.transform(3).as_coeffs(),
        );
    }

    assert!((peak - 1.6).abs() < 1e-9);
    assert!(control.view().animator().is_idle());
    assert_eq!(control.view().animator().scale(3), 1.0);
    assert_eq!(control.view().value(), 3);
}
