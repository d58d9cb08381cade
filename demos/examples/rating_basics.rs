// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating basics.
//!
//! Build the default six-star control, tap the fourth star, and print how a
//! host would draw each cell.
//!
//! Run:
//! - `cargo run -p understory_demos --example rating_basics`

use kurbo::Point;
use understory_rating::{Flares, RatingConfig, RatingControl, StarRating};
use understory_tracking::control::Control;
use understory_tracking::types::ControlEvents;

fn main() {
    let rating = StarRating::new(RatingConfig::default(), Flares::new()).unwrap();
    println!("preferred size: {:?}", rating.preferred_size());
    let mut control: RatingControl = Control::new(rating);

    // Tap the fourth star.
    let fourth = control.view().cell(4).unwrap().anchor();
    let down = control.pointer_down(fourth);
    let up = control.pointer_up(fourth);
    println!("== Tap ==\n  down: {:?}\n  up:   {:?}", down, up);

    assert_eq!(down, ControlEvents::VALUE_CHANGED);
    assert_eq!(up, ControlEvents::TOUCH_UP_INSIDE);
    assert_eq!(control.view().value(), 4);

    println!("== Cells ==");
    let rating = control.view();
    for cell in rating.cells() {
        let style = rating.style(cell.index()).unwrap();
        println!(
            "  #{} at {:?}: {:?} {:?} scale {:.2}",
            cell.index(),
            cell.anchor(),
            style.glyph,
            style.color,
            rating.animator().scale(cell.index()),
        );
    }

    // Active cells are exactly 1..=4.
    let active: Vec<usize> = (1..=rating.cell_count())
        .filter(|&i| rating.is_active(i))
        .collect();
    assert_eq!(active, vec![1, 2, 3, 4]);

    // The fourth star is flaring; taps in the gap between cells change nothing.
    assert!(rating.animator().is_animating(4));
    let gap = Point::new(52.0, 20.0);
    control.pointer_down(gap);
    control.pointer_up(gap);
    assert_eq!(control.view().value(), 4);
}
