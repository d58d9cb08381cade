// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag across the control with observers attached.
//!
//! Registers actions for value changes and gesture events, drags from the
//! second star to the fifth, and releases outside the control.
//! Set `RUST_LOG=debug` to see the tracking and flare logs.
//!
//! Run:
//! - `cargo run -p understory_demos --example rating_drag`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_rating::{NoAnimation, RatingConfig, StarRating};
use understory_tracking::control::Control;
use understory_tracking::tracker::TrackingState;
use understory_tracking::types::ControlEvents;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rating = StarRating::new(RatingConfig::default(), NoAnimation).unwrap();
    let mut control = Control::new(rating);

    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&values);
    control.add_action(ControlEvents::VALUE_CHANGED, move |rating, _| {
        sink.borrow_mut().push(rating.value());
    });

    let gestures = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&gestures);
    control.add_action(ControlEvents::ALL_TOUCH_EVENTS, move |_, event| {
        sink.borrow_mut().push(event);
    });

    let y = 20.0;
    let start = control.view().cell(2).unwrap().anchor();
    control.pointer_down(start);

    // Sweep right in small steps, crossing the gaps between cells.
    let mut x = start.x;
    while x <= 220.0 {
        control.pointer_moved(Point::new(x, y));
        x += 4.0;
    }
    tracing::info!(value = control.view().value(), "drag reached");

    // Leave the control to the right and let go.
    let outside = Point::new(400.0, y);
    control.pointer_moved(outside);
    control.pointer_up(outside);

    println!("== Values ==\n  {:?}", values.borrow());
    println!("== Gestures ==\n  {} events", gestures.borrow().len());

    assert_eq!(*values.borrow(), vec![2, 3, 4, 5]);
    assert_eq!(control.view().value(), 5);
    assert_eq!(control.state(), TrackingState::Idle);

    let gestures = gestures.borrow();
    assert_eq!(gestures.last(), Some(&ControlEvents::TOUCH_UP_OUTSIDE));
    assert!(gestures.contains(&ControlEvents::TOUCH_DRAG_INSIDE));
    assert!(gestures.contains(&ControlEvents::TOUCH_DRAG_OUTSIDE));
}
