//! State containers for the dashboard.
//!
//! Each store is a plain owned value. Other parts of the app learn about
//! changes by subscribing to the store's typed change events.

mod dashboard;
mod sound;
mod theme;

use std::fmt;

pub use dashboard::{DashboardEvent, DashboardStore};
pub use sound::{SoundEvent, SoundStore};
pub use theme::{ThemeEvent, ThemeStore};

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Observer list for change events of type `E`
pub struct Subscribers<E> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Box<dyn FnMut(&E)>)>,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<E> fmt::Debug for Subscribers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> Subscribers<E> {
    /// Register a listener. Listeners are notified in subscription order.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_listener_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<u32> = Subscribers::default();

        let a = Rc::clone(&seen);
        subs.subscribe(move |e| a.borrow_mut().push(("a", *e)));
        let b = Rc::clone(&seen);
        subs.subscribe(move |e| b.borrow_mut().push(("b", *e)));

        subs.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut subs: Subscribers<()> = Subscribers::default();

        let c = Rc::clone(&count);
        let id = subs.subscribe(move |_| *c.borrow_mut() += 1);
        subs.emit(&());
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.emit(&());

        assert_eq!(*count.borrow(), 1);
        assert!(subs.is_empty());
    }
}
