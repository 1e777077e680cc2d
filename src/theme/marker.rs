//! Shared dark-mode marker.
//!
//! Readers subscribe to changes; the theme resolver is the only writer.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Subscriber = Rc<dyn Fn(bool)>;

/// Handle returned by [`ThemeMarker::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct MarkerState {
    dark: Cell<bool>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
}

/// Observable "dark palette active" flag.
///
/// Clones share the same state. Single-threaded (UI thread only).
#[derive(Clone, Default)]
pub struct ThemeMarker {
    state: Rc<MarkerState>,
}

impl ThemeMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.state.dark.get()
    }

    /// Register a callback invoked with the new value on every publish.
    pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.state.next_id.get());
        self.state.next_id.set(id.0 + 1);
        self.state
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.state.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscribers.borrow().len()
    }

    /// Set the flag and notify subscribers, even when the value is unchanged.
    pub(crate) fn publish(&self, dark: bool) {
        self.state.dark.set(dark);

        // Snapshot so callbacks may subscribe/unsubscribe without a borrow conflict
        let subscribers: Vec<Subscriber> = self
            .state
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();

        for callback in subscribers {
            callback(dark);
        }
    }
}

impl fmt::Debug for ThemeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeMarker")
            .field("dark", &self.is_dark())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_marker_is_light() {
        assert!(!ThemeMarker::new().is_dark());
    }

    #[test]
    fn test_publish_notifies_all_subscribers() {
        let marker = ThemeMarker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = Rc::clone(&seen);
        marker.subscribe(move |dark| a.borrow_mut().push(("a", dark)));
        let b = Rc::clone(&seen);
        marker.subscribe(move |dark| b.borrow_mut().push(("b", dark)));

        marker.publish(true);

        assert!(marker.is_dark());
        assert_eq!(*seen.borrow(), vec![("a", true), ("b", true)]);
    }

    #[test]
    fn test_publish_same_value_still_notifies() {
        let marker = ThemeMarker::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        marker.subscribe(move |_| c.set(c.get() + 1));

        marker.publish(false);
        marker.publish(false);

        assert_eq!(count.get(), 2);
        assert!(!marker.is_dark());
    }

    #[test]
    fn test_clones_share_state() {
        let marker = ThemeMarker::new();
        let reader = marker.clone();
        marker.publish(true);
        assert!(reader.is_dark());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let marker = ThemeMarker::new();
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        let id = marker.subscribe(move |_| c.set(c.get() + 1));

        marker.publish(true);
        assert!(marker.unsubscribe(id));
        assert!(!marker.unsubscribe(id));
        marker.publish(false);

        assert_eq!(count.get(), 1);
        assert_eq!(marker.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_can_read_marker_during_publish() {
        let marker = ThemeMarker::new();
        let observed = Rc::new(Cell::new(None));
        let reader = marker.clone();
        let o = Rc::clone(&observed);
        marker.subscribe(move |_| o.set(Some(reader.is_dark())));

        marker.publish(true);

        assert_eq!(observed.get(), Some(true));
    }
}
