//! A minimal observable value with explicit subscriptions.
//!
//! [`Store`] holds one value, hands out snapshots, and pushes every change to
//! its listeners synchronously, in subscription order, before the mutating
//! call returns. Listeners run outside the store's locks, so a listener may
//! read the store or even mutate subscriptions while being notified.
//!
//! # Example
//!
//! ```rust
//! use dashboard_shell::Store;
//! use std::sync::{Arc, Mutex};
//!
//! let store = Store::new(1u32);
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let sub = store.subscribe(move |v: &u32| sink.lock().unwrap().push(*v));
//!
//! store.set(2);
//! store.update(|v| *v += 1);
//! assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
//!
//! sub.unsubscribe();
//! store.set(10);
//! assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Locks a mutex, recovering the guard if a listener panicked while holding it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Inner<T> {
    value: Mutex<T>,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
}

impl<T> Inner<T> {
    fn remove(&self, id: u64) {
        lock(&self.listeners).retain(|(lid, _)| *lid != id);
    }
}

/// Shared observable value. Cloning yields another handle to the same value.
pub struct Store<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(value),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Returns a snapshot of the current value.
    pub fn get(&self) -> T {
        lock(&self.inner.value).clone()
    }

    /// Replaces the value and notifies every listener.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut guard = lock(&self.inner.value);
            *guard = value;
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Mutates the value in place, notifies listeners, and returns the new value.
    pub fn update<F>(&self, f: F) -> T
    where
        F: FnOnce(&mut T),
    {
        let snapshot = {
            let mut guard = lock(&self.inner.value);
            f(&mut guard);
            guard.clone()
        };
        self.notify(&snapshot);
        snapshot
    }

    /// Registers a listener called with the new value after every change.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or [`Subscription::unsubscribe`] is called.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push((id, Arc::new(listener)));

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remove(id);
                }
            })),
        }
    }

    /// Number of live listeners.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }

    fn notify(&self, value: &T) {
        let listeners: Vec<Listener<T>> = lock(&self.inner.listeners)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &*lock(&self.inner.value))
            .field("subscribers", &lock(&self.inner.listeners).len())
            .finish()
    }
}

/// Handle keeping a listener registered. Unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Stops notification immediately.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
