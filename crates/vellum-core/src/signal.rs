//! Single-threaded observable value with explicit subscriptions.
//!
//! # Design
//! - Callbacks run synchronously, in subscription order, after the value is stored.
//! - Setting an equal value is a no-op, so re-applying state does not re-render.
//! - The subscriber list is snapshotted before notification; callbacks may read the
//!   signal, subscribe, or unsubscribe while being notified.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    next_id: Cell<u64>,
}

impl<T> Inner<T> {
    fn remove(&self, id: u64) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscriber, _)| *subscriber != id);
    }

    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers
            .borrow()
            .iter()
            .any(|(subscriber, _)| *subscriber == id)
    }
}

/// Observable value shared by cloning the handle.
pub struct Signal<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    /// Create a signal holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(initial),
                subscribers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Store `value` and notify subscribers when it differs from the current one.
    ///
    /// Returns `true` when subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        if *self.inner.value.borrow() == value {
            return false;
        }
        self.inner.value.replace(value.clone());

        let snapshot: Vec<(u64, Callback<T>)> = self.inner.subscribers.borrow().clone();
        for (id, callback) in snapshot {
            if self.inner.is_subscribed(id) {
                callback(&value);
            }
        }
        true
    }

    /// Register `callback` for future changes.
    ///
    /// The callback stays registered until the returned handle is unsubscribed or dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id);
                }
            })),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

/// Handle returned by [`Signal::subscribe`].
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Stop receiving notifications.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
