//! # ObservableStore
//!
//! The pub/sub primitive every stateful component is built on: holds a
//! snapshot, accepts subscribers, broadcasts synchronously on mutation, and
//! hands back a cancellation handle per subscriber.
//!
//! Broadcast rules:
//! - listeners run in subscription order with the full new snapshot;
//! - the listener list is snapshotted before iterating, and each entry is
//!   re-checked for liveness right before its callback, so a listener
//!   cancelled mid-broadcast is never invoked after cancellation;
//! - a `set` issued from inside a listener is queued and drained FIFO after
//!   the current broadcast completes, so no listener observes snapshots out
//!   of order.
//!
//! Subscribing the same closure twice yields two independent registrations;
//! there is no dedup by identity.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync + 'static>;

/// A value holder with synchronous fan-out to subscribers.
///
/// Cloning the store clones the handle, not the value: both handles share
/// the same snapshot and listener registry.
pub struct ObservableStore<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

struct Inner<T> {
    value: T,
    /// Monotonic token -> listener. Token order is subscription order, and
    /// removal by token keeps unsubscribe cheap.
    listeners: BTreeMap<u64, Listener<T>>,
    next_token: u64,
    broadcasting: bool,
    queued: VecDeque<T>,
}

fn lock<T>(mutex: &Mutex<Inner<T>>) -> MutexGuard<'_, Inner<T>> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T> Clone for ObservableStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> ObservableStore<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value: initial,
                listeners: BTreeMap::new(),
                next_token: 0,
                broadcasting: false,
                queued: VecDeque::new(),
            })),
        }
    }

    /// Current snapshot. Synchronous, no side effects.
    pub fn get(&self) -> T {
        lock(&self.inner).value.clone()
    }

    /// Registers a listener and immediately invokes it once with the current
    /// snapshot, so a newly mounted observer needs no separate initial fetch.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let listener: Listener<T> = Arc::new(listener);
        let (token, snapshot) = {
            let mut inner = lock(&self.inner);
            let token = inner.next_token;
            inner.next_token += 1;
            inner.listeners.insert(token, Arc::clone(&listener));
            (token, inner.value.clone())
        };
        // Initial delivery runs outside the lock so the listener is free to
        // read or mutate the store right away.
        listener(&snapshot);

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).listeners.remove(&token);
            }
        })
    }

    /// Replaces the snapshot and synchronously broadcasts it to every
    /// currently registered listener. Re-entrant calls from inside a
    /// listener are queued behind the broadcast in progress.
    pub fn set(&self, value: T) {
        let mut inner = lock(&self.inner);
        inner.value = value.clone();
        if inner.broadcasting {
            inner.queued.push_back(value);
            return;
        }
        inner.broadcasting = true;

        let mut current = value;
        loop {
            let batch: Vec<(u64, Listener<T>)> = inner
                .listeners
                .iter()
                .map(|(token, l)| (*token, Arc::clone(l)))
                .collect();
            drop(inner);

            tracing::debug!(listeners = batch.len(), "broadcasting snapshot");
            for (token, listener) in batch {
                // A listener may have been cancelled by an earlier callback
                // in this same batch.
                let alive = lock(&self.inner).listeners.contains_key(&token);
                if alive {
                    listener(&current);
                }
            }

            inner = lock(&self.inner);
            match inner.queued.pop_front() {
                Some(next) => current = next,
                None => break,
            }
        }
        inner.broadcasting = false;
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Handle returned by [`ObservableStore::subscribe`]. `cancel` removes the
/// listener; calling it again is a no-op. Dropping the handle without
/// cancelling leaves the listener registered.
pub struct Subscription {
    cancel: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

impl Subscription {
    fn new(f: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Mutex::new(Some(Box::new(f))),
        }
    }

    pub fn cancel(&self) {
        let f = self
            .cancel
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(f) = f {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<i32>>>, impl Fn(&i32) + Send + Sync + Clone) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |v: &i32| sink.lock().unwrap().push(*v))
    }

    #[test]
    fn subscribe_delivers_current_snapshot_immediately() {
        let store = ObservableStore::new(7);
        let (seen, listener) = recorder();
        let _sub = store.subscribe(listener);
        assert_eq!(*seen.lock().unwrap(), vec![7]);
    }

    #[test]
    fn set_broadcasts_to_all_listeners_in_subscription_order() {
        let store = ObservableStore::new(0);
        let order = Arc::new(Mutex::new(Vec::new()));
        let (a, b) = (Arc::clone(&order), Arc::clone(&order));
        let _s1 = store.subscribe(move |v: &i32| a.lock().unwrap().push(("first", *v)));
        let _s2 = store.subscribe(move |v: &i32| b.lock().unwrap().push(("second", *v)));
        store.set(1);
        assert_eq!(
            *order.lock().unwrap(),
            vec![("first", 0), ("second", 0), ("first", 1), ("second", 1)]
        );
    }

    #[test]
    fn cancelled_listener_receives_nothing_further() {
        let store = ObservableStore::new(0);
        let (seen, listener) = recorder();
        let sub = store.subscribe(listener);
        store.set(1);
        sub.cancel();
        store.set(2);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn cancel_twice_is_a_noop() {
        let store = ObservableStore::new(0);
        let (_seen, listener) = recorder();
        let sub = store.subscribe(listener);
        sub.cancel();
        sub.cancel();
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn same_closure_subscribed_twice_is_two_registrations() {
        let store = ObservableStore::new(0);
        let (seen, listener) = recorder();
        let _s1 = store.subscribe(listener.clone());
        let _s2 = store.subscribe(listener);
        store.set(5);
        // Initial delivery once per registration, then one broadcast each.
        assert_eq!(*seen.lock().unwrap(), vec![0, 0, 5, 5]);
    }

    #[test]
    fn cancelling_a_later_listener_mid_broadcast_skips_it() {
        let store = ObservableStore::new(0);
        let victim_sub: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let trigger = Arc::clone(&victim_sub);
        let _canceller = store.subscribe(move |v: &i32| {
            if *v == 1 {
                if let Some(sub) = trigger.lock().unwrap().take() {
                    sub.cancel();
                }
            }
        });

        let (seen, listener) = recorder();
        *victim_sub.lock().unwrap() = Some(store.subscribe(listener));

        store.set(1);
        // The victim got its initial snapshot only; the broadcast that
        // cancelled it never reached it.
        assert_eq!(*seen.lock().unwrap(), vec![0]);
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn listener_cancelling_itself_mid_broadcast_does_not_panic() {
        let store = ObservableStore::new(0);
        let own_sub: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let (seen, _) = recorder();

        let slot = Arc::clone(&own_sub);
        let sink = Arc::clone(&seen);
        let sub = store.subscribe(move |v: &i32| {
            sink.lock().unwrap().push(*v);
            if let Some(sub) = slot.lock().unwrap().take() {
                sub.cancel();
            }
        });
        *own_sub.lock().unwrap() = Some(sub);

        store.set(1);
        store.set(2);
        // Received the initial snapshot and the broadcast it cancelled in,
        // nothing afterwards.
        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn reentrant_set_is_queued_after_current_broadcast() {
        let store = ObservableStore::new(0);
        let chained = store.clone();
        let _chain = store.subscribe(move |v: &i32| {
            if *v == 1 {
                chained.set(2);
            }
        });
        let (seen, listener) = recorder();
        let _watch = store.subscribe(listener);

        store.set(1);
        // The re-entrant set(2) lands after the set(1) broadcast completes;
        // the watcher never sees 2 before 1.
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
        assert_eq!(store.get(), 2);
    }

    #[test]
    fn listener_registered_during_broadcast_joins_next_broadcast() {
        let store = ObservableStore::new(0);
        let late_seen = Arc::new(Mutex::new(Vec::new()));
        let late_sub: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let registrar = store.clone();
        let slot = Arc::clone(&late_sub);
        let sink = Arc::clone(&late_seen);
        let _s = store.subscribe(move |v: &i32| {
            if *v == 1 && slot.lock().unwrap().is_none() {
                let sink = Arc::clone(&sink);
                let sub = registrar.subscribe(move |v: &i32| sink.lock().unwrap().push(*v));
                *slot.lock().unwrap() = Some(sub);
            }
        });

        store.set(1);
        store.set(2);
        // Initial delivery with the then-current snapshot, then the later
        // broadcast; the in-flight set(1) batch did not include it.
        assert_eq!(*late_seen.lock().unwrap(), vec![1, 2]);
    }
}
