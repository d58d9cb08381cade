// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target/action registry: deliver [`ControlEvents`] to subscribed handlers.
//!
//! ## Delivery
//!
//! [`Actions::send`] walks the emitted events in delivery order (see
//! [`ControlEvents::each`]) and, for each one, calls every handler whose mask
//! contains it, in registration order.
//! A handler subscribed to several of the emitted events is called once per event.
//!
//! ## Minimal example
//!
//! ```
//! use understory_tracking::actions::Actions;
//! use understory_tracking::types::ControlEvents;
//!
//! struct Dial { value: u32 }
//!
//! let mut actions: Actions<Dial> = Actions::new();
//! let id = actions.add(ControlEvents::VALUE_CHANGED, |dial, _| {
//!     assert_eq!(dial.value, 3);
//! });
//! let calls = actions.send(
//!     &Dial { value: 3 },
//!     ControlEvents::TOUCH_UP_INSIDE | ControlEvents::VALUE_CHANGED,
//! );
//! assert_eq!(calls, 1);
//! assert!(actions.remove(id));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::ControlEvents;

/// Handle for a registered action, used to remove it later.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActionId(u32);

struct Entry<V: ?Sized> {
    id: ActionId,
    mask: ControlEvents,
    handler: Box<dyn FnMut(&V, ControlEvents)>,
}

/// Handlers subscribed to events of views of type `V`.
pub struct Actions<V: ?Sized> {
    entries: Vec<Entry<V>>,
    next_id: u32,
}

impl<V: ?Sized> core::fmt::Debug for Actions<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let masks: Vec<(ActionId, ControlEvents)> =
            self.entries.iter().map(|e| (e.id, e.mask)).collect();
        f.debug_struct("Actions")
            .field("entries", &masks)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<V: ?Sized> Default for Actions<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized> Actions<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Subscribe `handler` to every event in `mask`.
    ///
    /// The handler receives the view and the single event being delivered.
    pub fn add(
        &mut self,
        mask: ControlEvents,
        handler: impl FnMut(&V, ControlEvents) + 'static,
    ) -> ActionId {
        let id = ActionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            id,
            mask,
            handler: Box::new(handler),
        });
        id
    }

    /// Unsubscribe a handler. Returns false if `id` was not registered.
    pub fn remove(&mut self, id: ActionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove every handler.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of the masks of all registered handlers.
    pub fn subscribed(&self) -> ControlEvents {
        self.entries
            .iter()
            .fold(ControlEvents::empty(), |acc, e| acc | e.mask)
    }

    /// Deliver `events` emitted by `view`. Returns the number of handler calls made.
    pub fn send(&mut self, view: &V, events: ControlEvents) -> usize {
        let mut calls = 0;
        for event in events.each() {
            for entry in &mut self.entries {
                if entry.mask.contains(event) {
                    (entry.handler)(view, event);
                    calls += 1;
                }
            }
        }
        calls
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    type Log = Rc<RefCell<Vec<(&'static str, ControlEvents)>>>;

    fn recorder(log: &Log, name: &'static str) -> impl FnMut(&u8, ControlEvents) + 'static {
        let log = Rc::clone(log);
        move |_, event| log.borrow_mut().push((name, event))
    }

    #[test]
    fn delivers_by_event_then_registration_order() {
        let log = Log::default();
        let mut actions: Actions<u8> = Actions::new();
        let _ = actions.add(ControlEvents::ALL_EVENTS, recorder(&log, "all"));
        let _ = actions.add(ControlEvents::VALUE_CHANGED, recorder(&log, "value"));

        let calls = actions.send(
            &0,
            ControlEvents::VALUE_CHANGED | ControlEvents::TOUCH_DRAG_INSIDE,
        );
        assert_eq!(calls, 3);
        assert_eq!(
            *log.borrow(),
            vec![
                ("all", ControlEvents::TOUCH_DRAG_INSIDE),
                ("all", ControlEvents::VALUE_CHANGED),
                ("value", ControlEvents::VALUE_CHANGED),
            ]
        );
    }

    #[test]
    fn unsubscribed_events_are_not_delivered() {
        let log = Log::default();
        let mut actions: Actions<u8> = Actions::new();
        let _ = actions.add(ControlEvents::TOUCH_CANCEL, recorder(&log, "cancel"));
        assert_eq!(actions.send(&0, ControlEvents::TOUCH_UP_INSIDE), 0);
        assert_eq!(actions.send(&0, ControlEvents::empty()), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn remove_stops_delivery() {
        let log = Log::default();
        let mut actions: Actions<u8> = Actions::new();
        let a = actions.add(ControlEvents::VALUE_CHANGED, recorder(&log, "a"));
        let b = actions.add(ControlEvents::VALUE_CHANGED, recorder(&log, "b"));
        assert_ne!(a, b);
        assert!(actions.remove(a));
        assert!(!actions.remove(a));
        assert_eq!(actions.len(), 1);

        let _ = actions.send(&0, ControlEvents::VALUE_CHANGED);
        assert_eq!(*log.borrow(), vec![("b", ControlEvents::VALUE_CHANGED)]);

        actions.clear();
        assert!(actions.is_empty());
    }

    #[test]
    fn subscribed_is_union_of_masks() {
        let mut actions: Actions<u8> = Actions::new();
        assert!(actions.subscribed().is_empty());
        let _ = actions.add(ControlEvents::TOUCH_CANCEL, |_, _| {});
        let _ = actions.add(ControlEvents::VALUE_CHANGED, |_, _| {});
        assert_eq!(
            actions.subscribed(),
            ControlEvents::TOUCH_CANCEL | ControlEvents::VALUE_CHANGED
        );
    }

    #[test]
    fn handlers_read_the_view() {
        let seen = Rc::new(RefCell::new(None));
        let mut actions: Actions<u8> = Actions::new();
        let sink = Rc::clone(&seen);
        let _ = actions.add(ControlEvents::VALUE_CHANGED, move |v, _| {
            *sink.borrow_mut() = Some(*v);
        });
        let _ = actions.send(&7, ControlEvents::VALUE_CHANGED);
        assert_eq!(*seen.borrow(), Some(7));
    }
}
