// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rating --heading-base-level=0

//! Understory Rating: a toolkit-agnostic star rating control.
//!
//! A row of square cells records an integer rating from 1 to the cell count.
//! Pressing or dragging over a cell selects it; every cell up to and including the
//! selected one is active.
//!
//! - [`RatingConfig`]: cell count, geometry, glyphs, font, colors, flare, and hit-testing strategy.
//! - [`CellLayout`]: places the cells once and resolves pointer locations to cells.
//! - [`StarRating`]: owns the value and implements
//!   [`GestureResponsive`](understory_tracking::types::GestureResponsive).
//! - [`perform_flare`] / [`Animator`]: the scale cue on a newly selected cell.
//!
//! ## What the host provides
//!
//! The control does not draw, own a window, or run an event loop.
//! The host forwards pointer events (through [`RatingControl`] or its own
//! [`Tracker`](understory_tracking::tracker::Tracker)), draws each cell from
//! [`StarRating::style`] at [`Cell::anchor`], and applies the flare transform from
//! its [`Animator`].
//! Size the control with [`StarRating::preferred_size`] when the host layout has no opinion.
//!
//! ## Notifications
//!
//! Events carry no payload: handlers read [`StarRating::value`] from the control they are handed.
//! [`VALUE_CHANGED`](understory_tracking::types::ControlEvents::VALUE_CHANGED) fires only when
//! the value actually changes, so re-pressing the current cell or dragging back into it is silent.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell as Counter;
//! use std::rc::Rc;
//!
//! use understory_rating::{RatingConfig, RatingControl, StarRating, Flares};
//! use understory_tracking::control::Control;
//! use understory_tracking::types::ControlEvents;
//!
//! let rating = StarRating::new(RatingConfig::default(), Flares::new()).unwrap();
//! let mut control: RatingControl = Control::new(rating);
//!
//! let changes = Rc::new(Counter::new(0));
//! let sink = Rc::clone(&changes);
//! control.add_action(ControlEvents::VALUE_CHANGED, move |rating, _| {
//!     assert!(rating.value() >= 1);
//!     sink.set(sink.get() + 1);
//! });
//!
//! // Press the fourth star, drag to the fifth, release.
//! let fourth = control.view().cell(4).unwrap().anchor();
//! let fifth = control.view().cell(5).unwrap().anchor();
//! control.pointer_down(fourth);
//! control.pointer_moved(fifth);
//! control.pointer_up(fifth);
//!
//! assert_eq!(control.view().value(), 5);
//! assert_eq!(changes.get(), 2);
//! assert!(control.view().is_active(5) && !control.view().is_active(6));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod control;
pub mod flare;
pub mod layout;

pub use config::{Color, ConfigError, FontSpec, FontWeight, Glyphs, HitTest, RatingConfig};
pub use control::{CellStyle, RatingControl, StarRating};
pub use flare::{
    Animator, Easing, Flare, FlareTimeline, Flares, NoAnimation, ScalePhase, perform_flare,
};
pub use layout::{Cell, CellLayout};
