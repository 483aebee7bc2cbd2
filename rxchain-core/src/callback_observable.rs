// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable backed by a caller-supplied subscription function.

use crate::{Observable, Observer, Result, RxError, SharedObserver, Subscription};
use std::fmt;
use std::sync::Arc;

type SubscribeFn<T> = Arc<dyn Fn(SharedObserver<T>) -> Subscription + Send + Sync>;

/// An [`Observable`] whose `subscribe` invokes a factory function.
///
/// The factory receives the observer and returns the [`Subscription`] for that
/// link; `subscribe` hands it back unchanged. Disposal behaviour is entirely
/// whatever the factory's subscription does.
///
/// Cloning is cheap and clones share the same factory.
///
/// # Examples
///
/// ```
/// use rxchain_core::{CallbackObservable, Observable, SharedObserver, Subscription};
///
/// let numbers = CallbackObservable::new(|observer: SharedObserver<i32>| {
///     for n in 1..=3 {
///         observer.on_next(n);
///     }
///     observer.on_completed();
///     Subscription::empty()
/// });
///
/// numbers.subscribe_next(|n| assert!((1..=3).contains(&n)));
/// ```
pub struct CallbackObservable<T> {
    subscribe: SubscribeFn<T>,
}

impl<T> CallbackObservable<T> {
    /// Creates an observable from its subscription function.
    pub fn new<F>(subscribe: F) -> Self
    where
        F: Fn(SharedObserver<T>) -> Subscription + Send + Sync + 'static,
    {
        Self {
            subscribe: Arc::new(subscribe),
        }
    }

    /// Creates an observable from an optional subscription function.
    ///
    /// # Errors
    ///
    /// Returns [`RxError::MissingHandler`] if `subscribe` is `None`.
    pub fn try_new<F>(subscribe: Option<F>) -> Result<Self>
    where
        F: Fn(SharedObserver<T>) -> Subscription + Send + Sync + 'static,
    {
        subscribe
            .map(Self::new)
            .ok_or(RxError::missing_handler("subscribe"))
    }
}

impl<T: 'static> Observable for CallbackObservable<T> {
    type Item = T;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T> + Send + Sync + 'static,
    {
        (self.subscribe)(Arc::new(observer))
    }
}

impl<T> Clone for CallbackObservable<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe: Arc::clone(&self.subscribe),
        }
    }
}

impl<T> fmt::Debug for CallbackObservable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackObservable").finish_non_exhaustive()
    }
}
