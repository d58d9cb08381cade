// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracker: the Idle → Tracking → Idle state machine.
//!
//! ## Transitions
//!
//! - `Idle` → `Tracking`: [`Tracker::pointer_down`] inside the view's bounds, when
//!   [`begin_tracking`](crate::types::GestureResponsive::begin_tracking) asks to keep tracking.
//!   A press outside the bounds never reaches the view.
//! - `Tracking` → `Tracking`: [`Tracker::pointer_moved`] while
//!   [`continue_tracking`](crate::types::GestureResponsive::continue_tracking) keeps tracking.
//! - `Tracking` → `Idle`: [`Tracker::pointer_up`] (ends with the release touch),
//!   [`Tracker::pointer_cancelled`] (cancels), or a continue hook declining to go on
//!   (ends with no touch).
//!
//! Moves, releases, and cancels that arrive while idle are ignored.
//! Nothing here can fail; every method returns the events the view produced, possibly none.

use kurbo::Point;

use crate::types::{ControlEvents, GestureResponsive, Touch};

/// Whether a gesture is currently being followed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TrackingState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A press was accepted and has not been released or cancelled yet.
    Tracking,
}

/// Drives a [`GestureResponsive`] view from raw pointer events.
///
/// The tracker only holds the gesture state; the view is passed to every call so
/// the same tracker type works with any view and ownership stays with the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tracker {
    state: TrackingState,
}

impl Tracker {
    /// Create an idle tracker.
    pub const fn new() -> Self {
        Self {
            state: TrackingState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Returns true while a gesture is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    /// A pointer was pressed at `location` (view-local coordinates).
    pub fn pointer_down<V: GestureResponsive + ?Sized>(
        &mut self,
        view: &mut V,
        location: Point,
    ) -> ControlEvents {
        if self.is_tracking() {
            tracing::trace!(x = location.x, y = location.y, "press ignored, already tracking");
            return ControlEvents::empty();
        }
        if !view.bounds().contains(location) {
            tracing::trace!(x = location.x, y = location.y, "press outside bounds ignored");
            return ControlEvents::empty();
        }
        let response = view.begin_tracking(&Touch::new(location));
        if response.keep_tracking {
            self.state = TrackingState::Tracking;
            tracing::debug!(x = location.x, y = location.y, "tracking began");
        }
        response.events
    }

    /// The pointer moved to `location` (view-local coordinates).
    pub fn pointer_moved<V: GestureResponsive + ?Sized>(
        &mut self,
        view: &mut V,
        location: Point,
    ) -> ControlEvents {
        if !self.is_tracking() {
            return ControlEvents::empty();
        }
        let response = view.continue_tracking(&Touch::new(location));
        if response.keep_tracking {
            return response.events;
        }
        self.state = TrackingState::Idle;
        tracing::debug!("tracking stopped by view");
        response.events | view.end_tracking(None)
    }

    /// The pointer was released at `location` (view-local coordinates).
    pub fn pointer_up<V: GestureResponsive + ?Sized>(
        &mut self,
        view: &mut V,
        location: Point,
    ) -> ControlEvents {
        if !self.is_tracking() {
            return ControlEvents::empty();
        }
        self.state = TrackingState::Idle;
        tracing::debug!(x = location.x, y = location.y, "tracking ended");
        view.end_tracking(Some(&Touch::new(location)))
    }

    /// The host cancelled the gesture.
    pub fn pointer_cancelled<V: GestureResponsive + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> ControlEvents {
        if !self.is_tracking() {
            return ControlEvents::empty();
        }
        self.state = TrackingState::Idle;
        tracing::debug!("tracking cancelled");
        view.cancel_tracking()
    }
}
