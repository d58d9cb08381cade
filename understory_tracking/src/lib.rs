// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tracking --heading-base-level=0

//! Understory Tracking: gesture tracking for controls, without a base class.
//!
//! ## Overview
//!
//! A control that reacts to a press-and-drag gesture (a slider, a switch, a rating row) needs the
//! same plumbing regardless of toolkit: decide when a gesture starts, feed it moves until it ends or
//! is cancelled, and tell interested parties what happened.
//! This crate provides that plumbing as three small pieces that compose instead of inherit.
//!
//! - [`GestureResponsive`](crate::types::GestureResponsive): the capability a view implements.
//!   It exposes begin/continue/end/cancel hooks and its local bounds.
//! - [`Tracker`](crate::tracker::Tracker): the Idle → Tracking → Idle state machine.
//!   It turns raw pointer events into hook calls and collects the [`ControlEvents`](crate::types::ControlEvents) they produce.
//! - [`Actions`](crate::actions::Actions): a target/action registry.
//!   Handlers subscribe with an event mask and receive the view and each emitted event.
//!
//! [`Control`](crate::control::Control) bundles a view with a tracker and its actions for hosts that
//! want a single object to forward pointer events to.
//!
//! ## Events carry no payload
//!
//! Each emitted event only says "this happened on this control".
//! Handlers read whatever state they need from the view they are handed.
//! Within one callback, events are delivered in [`ControlEvents`](crate::types::ControlEvents) bit order,
//! so gesture events (drag, release, cancel) always precede [`VALUE_CHANGED`](crate::types::ControlEvents::VALUE_CHANGED).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_tracking::control::Control;
//! use understory_tracking::types::{ControlEvents, GestureResponsive};
//!
//! // A view that relies entirely on the default hooks.
//! struct Pad;
//! impl GestureResponsive for Pad {
//!     fn bounds(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 100.0, 40.0)
//!     }
//! }
//!
//! let mut control = Control::new(Pad);
//! assert!(control.pointer_down(Point::new(10.0, 10.0)).is_empty());
//! assert_eq!(
//!     control.pointer_moved(Point::new(150.0, 10.0)),
//!     ControlEvents::TOUCH_DRAG_OUTSIDE
//! );
//! assert_eq!(
//!     control.pointer_up(Point::new(20.0, 10.0)),
//!     ControlEvents::TOUCH_UP_INSIDE
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod actions;
pub mod control;
pub mod tracker;
pub mod types;
