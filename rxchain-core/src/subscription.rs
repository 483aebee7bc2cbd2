// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposable handle for a single observer-to-observable link.

use crate::logging::log_trace;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

type Teardown = Box<dyn FnOnce() + Send>;

/// Ownership token returned by [`Observable::subscribe`](crate::Observable::subscribe).
///
/// Calling [`unsubscribe`](Self::unsubscribe) releases the link by running the
/// teardown registered by the source. Teardown runs at most once, no matter how
/// many times `unsubscribe` is called.
///
/// Dropping a `Subscription` does **not** unsubscribe; the link stays alive
/// until it is released explicitly. Use [`into_guard`](Self::into_guard) for
/// release-on-drop.
///
/// # Examples
///
/// ```
/// use rxchain_core::Subscription;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let released = Arc::new(AtomicBool::new(false));
/// let flag = released.clone();
/// let subscription = Subscription::new(move || flag.store(true, Ordering::SeqCst));
///
/// subscription.unsubscribe();
/// assert!(released.load(Ordering::SeqCst));
/// assert!(subscription.is_closed());
/// ```
#[derive(Clone)]
pub struct Subscription {
    state: Arc<Mutex<SubscriptionState>>,
}

struct SubscriptionState {
    closed: bool,
    teardowns: Vec<Teardown>,
}

impl Subscription {
    /// Creates a subscription that runs `teardown` when released.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::with_teardowns(vec![Box::new(teardown)])
    }

    /// Creates a subscription with nothing to release.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_teardowns(Vec::new())
    }

    fn with_teardowns(teardowns: Vec<Teardown>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubscriptionState {
                closed: false,
                teardowns,
            })),
        }
    }

    /// Ties `child` to this subscription: releasing `self` also releases `child`.
    ///
    /// If `self` is already closed, `child` is released immediately.
    pub fn add(&self, child: Subscription) {
        let mut state = self.state.lock();
        if state.closed {
            drop(state);
            child.unsubscribe();
            return;
        }
        state.teardowns.push(Box::new(move || child.unsubscribe()));
    }

    /// Releases the link. Idempotent.
    pub fn unsubscribe(&self) {
        // Teardowns run outside the lock so they may touch this subscription again.
        let teardowns = {
            let mut state = self.state.lock();
            if state.closed {
                return;
            }
            state.closed = true;
            std::mem::take(&mut state.teardowns)
        };

        log_trace!(teardowns = teardowns.len(), "subscription released");
        for teardown in teardowns {
            teardown();
        }
    }

    /// Returns `true` once [`unsubscribe`](Self::unsubscribe) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Converts this subscription into a guard that unsubscribes on drop.
    #[must_use]
    pub fn into_guard(self) -> SubscriptionGuard {
        SubscriptionGuard(self)
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// RAII wrapper that releases its [`Subscription`] when dropped.
#[derive(Debug)]
#[must_use = "dropping the guard unsubscribes immediately"]
pub struct SubscriptionGuard(Subscription);

impl SubscriptionGuard {
    /// Borrow the wrapped subscription.
    #[must_use]
    pub fn subscription(&self) -> &Subscription {
        &self.0
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.0.unsubscribe();
    }
}
