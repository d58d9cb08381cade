// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A view composed with its tracker and actions.
//!
//! [`Control`] is the glue a host usually writes by hand: forward pointer events
//! to a [`Tracker`], then hand whatever the view emitted to the [`Actions`].

use kurbo::Point;

use crate::actions::{ActionId, Actions};
use crate::tracker::{Tracker, TrackingState};
use crate::types::{ControlEvents, GestureResponsive};

/// A [`GestureResponsive`] view plus the state needed to drive it.
pub struct Control<V> {
    view: V,
    tracker: Tracker,
    actions: Actions<V>,
}

impl<V: core::fmt::Debug> core::fmt::Debug for Control<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Control")
            .field("view", &self.view)
            .field("tracker", &self.tracker)
            .field("actions", &self.actions)
            .finish()
    }
}

impl<V: GestureResponsive> Control<V> {
    /// Wrap `view` with an idle tracker and no actions.
    pub fn new(view: V) -> Self {
        Self {
            view,
            tracker: Tracker::new(),
            actions: Actions::new(),
        }
    }

    /// The wrapped view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The wrapped view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Unwrap the view, dropping the tracker and actions.
    pub fn into_inner(self) -> V {
        self.view
    }

    /// The registered actions.
    pub fn actions_mut(&mut self) -> &mut Actions<V> {
        &mut self.actions
    }

    /// Shorthand for [`Actions::add`] on this control's actions.
    pub fn add_action(
        &mut self,
        mask: ControlEvents,
        handler: impl FnMut(&V, ControlEvents) + 'static,
    ) -> ActionId {
        self.actions.add(mask, handler)
    }

    /// Current tracking state.
    pub fn state(&self) -> TrackingState {
        self.tracker.state()
    }

    /// Forward a press; see [`Tracker::pointer_down`].
    pub fn pointer_down(&mut self, location: Point) -> ControlEvents {
        let events = self.tracker.pointer_down(&mut self.view, location);
        self.dispatch(events)
    }

    /// Forward a move; see [`Tracker::pointer_moved`].
    pub fn pointer_moved(&mut self, location: Point) -> ControlEvents {
        let events = self.tracker.pointer_moved(&mut self.view, location);
        self.dispatch(events)
    }

    /// Forward a release; see [`Tracker::pointer_up`].
    pub fn pointer_up(&mut self, location: Point) -> ControlEvents {
        let events = self.tracker.pointer_up(&mut self.view, location);
        self.dispatch(events)
    }

    /// Forward a cancellation; see [`Tracker::pointer_cancelled`].
    pub fn pointer_cancelled(&mut self) -> ControlEvents {
        let events = self.tracker.pointer_cancelled(&mut self.view);
        self.dispatch(events)
    }

    fn dispatch(&mut self, events: ControlEvents) -> ControlEvents {
        if !events.is_empty() {
            let _ = self.actions.send(&self.view, events);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Response, Touch};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Rect;

    // Counts accepted presses.
    #[derive(Debug, Default)]
    struct Counter {
        count: u32,
    }

    impl GestureResponsive for Counter {
        fn bounds(&self) -> Rect {
            Rect::new(0.0, 0.0, 50.0, 50.0)
        }

        fn begin_tracking(&mut self, _touch: &Touch) -> Response {
            self.count += 1;
            Response::track(ControlEvents::VALUE_CHANGED)
        }
    }

    #[test]
    fn emitted_events_reach_actions_with_updated_view() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut control = Control::new(Counter::default());
        let sink = Rc::clone(&seen);
        let _ = control.add_action(ControlEvents::ALL_EVENTS, move |view, event| {
            sink.borrow_mut().push((view.count, event));
        });

        let _ = control.pointer_down(Point::new(10.0, 10.0));
        let _ = control.pointer_moved(Point::new(60.0, 10.0));
        let _ = control.pointer_up(Point::new(60.0, 10.0));

        assert_eq!(
            *seen.borrow(),
            [
                (1, ControlEvents::VALUE_CHANGED),
                (1, ControlEvents::TOUCH_DRAG_OUTSIDE),
                (1, ControlEvents::TOUCH_UP_OUTSIDE),
            ]
        );
        assert_eq!(control.state(), TrackingState::Idle);
    }

    #[test]
    fn cancel_is_dispatched() {
        let cancelled = Rc::new(RefCell::new(0));
        let mut control = Control::new(Counter::default());
        let sink = Rc::clone(&cancelled);
        let _ = control.add_action(ControlEvents::TOUCH_CANCEL, move |_, _| {
            *sink.borrow_mut() += 1;
        });

        let _ = control.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(control.state(), TrackingState::Tracking);
        assert_eq!(control.pointer_cancelled(), ControlEvents::TOUCH_CANCEL);
        assert_eq!(*cancelled.borrow(), 1);
        assert_eq!(control.into_inner().count, 1);
    }
}
