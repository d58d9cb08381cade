// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for tracking: control events, touches, hook responses, and the view capability.
//!
//! ## Overview
//!
//! These types describe the tracking protocol between a host and a view.
//! They are driven by the [`tracker`](crate::tracker) and dispatched by [`actions`](crate::actions).

use kurbo::{Point, Rect};

bitflags::bitflags! {
    /// Notifications a control emits while it is being tracked.
    ///
    /// Used both for a single emitted event and as a subscription mask in
    /// [`Actions::add`](crate::actions::Actions::add).
    /// Bit order is delivery order: see [`ControlEvents::each`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlEvents: u16 {
        /// The pointer moved while inside the control's bounds.
        const TOUCH_DRAG_INSIDE  = 1 << 0;
        /// The pointer moved while outside the control's bounds.
        const TOUCH_DRAG_OUTSIDE = 1 << 1;
        /// The pointer was released inside the control's bounds.
        const TOUCH_UP_INSIDE    = 1 << 2;
        /// The pointer was released outside the control's bounds.
        const TOUCH_UP_OUTSIDE   = 1 << 3;
        /// The host cancelled the gesture (for example, a scroll view took it over).
        const TOUCH_CANCEL       = 1 << 4;
        /// The control's value changed.
        const VALUE_CHANGED      = 1 << 5;

        /// Every touch-related event.
        const ALL_TOUCH_EVENTS = Self::TOUCH_DRAG_INSIDE.bits()
            | Self::TOUCH_DRAG_OUTSIDE.bits()
            | Self::TOUCH_UP_INSIDE.bits()
            | Self::TOUCH_UP_OUTSIDE.bits()
            | Self::TOUCH_CANCEL.bits();
        /// Every event.
        const ALL_EVENTS = Self::ALL_TOUCH_EVENTS.bits() | Self::VALUE_CHANGED.bits();
    }
}

impl ControlEvents {
    const DELIVERY_ORDER: [Self; 6] = [
        Self::TOUCH_DRAG_INSIDE,
        Self::TOUCH_DRAG_OUTSIDE,
        Self::TOUCH_UP_INSIDE,
        Self::TOUCH_UP_OUTSIDE,
        Self::TOUCH_CANCEL,
        Self::VALUE_CHANGED,
    ];

    /// Iterate the single events contained in `self`, in delivery order.
    ///
    /// Composite masks such as [`ALL_EVENTS`](Self::ALL_EVENTS) are expanded.
    pub fn each(self) -> impl Iterator<Item = Self> {
        Self::DELIVERY_ORDER
            .into_iter()
            .filter(move |event| self.contains(*event))
    }
}

/// A pointer location in the tracked view's local coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// Location relative to the view's origin.
    pub location: Point,
}

impl Touch {
    /// Create a touch at `location`.
    pub const fn new(location: Point) -> Self {
        Self { location }
    }
}

/// Result of a [`GestureResponsive`] begin/continue hook.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// Events produced while handling the hook.
    pub events: ControlEvents,
    /// Whether the view wants to keep receiving this gesture.
    pub keep_tracking: bool,
}

impl Response {
    /// Keep tracking, reporting `events`.
    pub const fn track(events: ControlEvents) -> Self {
        Self {
            events,
            keep_tracking: true,
        }
    }

    /// Stop tracking, reporting `events`.
    pub const fn stop(events: ControlEvents) -> Self {
        Self {
            events,
            keep_tracking: false,
        }
    }
}

/// The capability of a view that can follow a press-and-drag gesture.
///
/// Only [`bounds`](Self::bounds) is required.
/// The default hooks accept every gesture and report drag/release events from a
/// containment test against the bounds; views override them to layer their own
/// behavior (typically a value update) on top.
///
/// Hooks are driven by a [`Tracker`](crate::tracker::Tracker):
/// - [`begin_tracking`](Self::begin_tracking) once, for a press inside the bounds.
/// - [`continue_tracking`](Self::continue_tracking) for every move while tracking.
/// - Exactly one of [`end_tracking`](Self::end_tracking) or [`cancel_tracking`](Self::cancel_tracking) to finish.
pub trait GestureResponsive {
    /// The view's bounds in its own coordinate space.
    fn bounds(&self) -> Rect;

    /// A press landed inside the view.
    fn begin_tracking(&mut self, touch: &Touch) -> Response {
        let _ = touch;
        Response::track(ControlEvents::empty())
    }

    /// The pointer moved during a tracked gesture.
    fn continue_tracking(&mut self, touch: &Touch) -> Response {
        if self.bounds().contains(touch.location) {
            Response::track(ControlEvents::TOUCH_DRAG_INSIDE)
        } else {
            Response::track(ControlEvents::TOUCH_DRAG_OUTSIDE)
        }
    }

    /// The gesture ended.
    ///
    /// `touch` is `None` when tracking stopped because a hook declined to continue.
    fn end_tracking(&mut self, touch: Option<&Touch>) -> ControlEvents {
        match touch {
            Some(touch) if self.bounds().contains(touch.location) => {
                ControlEvents::TOUCH_UP_INSIDE
            }
            Some(_) => ControlEvents::TOUCH_UP_OUTSIDE,
            None => ControlEvents::empty(),
        }
    }

    /// The host cancelled the gesture.
    fn cancel_tracking(&mut self) -> ControlEvents {
        ControlEvents::TOUCH_CANCEL
    }
}
