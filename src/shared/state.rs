//! Observable state cells shared between header components
//!
//! A `StateCell` is owned by the page shell and handed to components, which
//! read it, write it, or subscribe to its changes. Everything here is
//! single-threaded: subscribers run synchronously inside `set`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Subscriber<T>)>>,
    next_id: Cell<u64>,
}

/// Shared, observable value. Clones point at the same cell.
pub struct StateCell<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Store a new value. Subscribers are notified only when it differs from
    /// the current one.
    pub fn set(&self, value: T) {
        if *self.inner.value.borrow() == value {
            return;
        }
        *self.inner.value.borrow_mut() = value.clone();

        // Snapshot so subscribers may (un)subscribe or write other cells
        let subscribers: Vec<Subscriber<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();

        for subscriber in subscribers {
            subscriber(&value);
        }
    }

    /// Register a change listener. It stays registered until the returned
    /// `Subscription` is dropped.
    pub fn subscribe(&self, on_change: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(on_change)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .subscribers
                        .borrow_mut()
                        .retain(|(existing, _)| *existing != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

/// Handle for a registered subscriber; unsubscribes on drop
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// The two page-level flags the header dropdowns coordinate through
#[derive(Clone, Debug)]
pub struct HeaderFlags {
    pub navigation_open: StateCell<bool>,
    pub roadmaps_open: StateCell<bool>,
}

impl HeaderFlags {
    pub fn new() -> Self {
        Self {
            navigation_open: StateCell::new(false),
            roadmaps_open: StateCell::new(false),
        }
    }
}

impl Default for HeaderFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_notifies_on_change_only() {
        let cell = StateCell::new(false);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |value| sink.borrow_mut().push(*value));

        cell.set(true);
        cell.set(true);
        cell.set(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
        assert!(!cell.get());
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let cell = StateCell::new(0u32);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let sub = cell.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(cell.subscriber_count(), 1);

        cell.set(1);
        drop(sub);
        cell.set(2);

        assert_eq!(calls.get(), 1);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn test_clones_share_value() {
        let cell = StateCell::new(false);
        let other = cell.clone();
        other.set(true);
        assert!(cell.get());
    }

    #[test]
    fn test_subscriber_can_write_another_cell() {
        let source = StateCell::new(false);
        let target = StateCell::new(true);
        let target_handle = target.clone();
        let _sub = source.subscribe(move |open| {
            if *open {
                target_handle.set(false);
            }
        });

        source.set(true);
        assert!(!target.get());
    }

    #[test]
    fn test_subscription_outliving_cell() {
        let cell = StateCell::new(false);
        let sub = cell.subscribe(|_| {});
        drop(cell);
        sub.cancel();
    }

    #[test]
    fn test_header_flags_start_closed() {
        let flags = HeaderFlags::default();
        assert!(!flags.navigation_open.get());
        assert!(!flags.roadmaps_open.get());
    }
}
