// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The subscription-source contract.

use crate::logging::log_warn;
use crate::{CallbackObserver, Observer, RxError, Subscription};
use std::sync::Arc;

/// A place an [`Observer`] can attach to receive a future sequence of signals.
///
/// Each call to [`subscribe`](Self::subscribe) is independent: a cold source
/// starts its producing work afresh for every subscriber. The returned
/// [`Subscription`] is owned by the caller, who releases it to stop delivery.
pub trait Observable {
    /// Type of the values pushed to `on_next`.
    type Item;

    /// Attaches `observer` and returns the handle for that link.
    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<Self::Item> + Send + Sync + 'static;

    /// Attaches a terminal subscriber built from three handlers.
    ///
    /// # Examples
    ///
    /// ```
    /// use rxchain_core::{CallbackObservable, Observable, SharedObserver, Subscription};
    ///
    /// let source = CallbackObservable::new(|observer: SharedObserver<i32>| {
    ///     observer.on_next(7);
    ///     observer.on_completed();
    ///     Subscription::empty()
    /// });
    ///
    /// source.subscribe_with(
    ///     |value| assert_eq!(value, 7),
    ///     |error| panic!("unexpected error: {error}"),
    ///     || {},
    /// );
    /// ```
    fn subscribe_with<N, E, C>(&self, on_next: N, on_error: E, on_completed: C) -> Subscription
    where
        Self::Item: 'static,
        N: Fn(Self::Item) + Send + Sync + 'static,
        E: Fn(RxError) + Send + Sync + 'static,
        C: Fn() + Send + Sync + 'static,
    {
        self.subscribe(CallbackObserver::new(on_next, on_error, on_completed))
    }

    /// Attaches a terminal subscriber interested only in values.
    ///
    /// Completion is ignored; an error is logged and otherwise dropped.
    fn subscribe_next<N>(&self, on_next: N) -> Subscription
    where
        Self::Item: 'static,
        N: Fn(Self::Item) + Send + Sync + 'static,
    {
        self.subscribe_with(
            on_next,
            |_error| {
                log_warn!(error = %_error, "unhandled error reached a value-only subscriber");
            },
            || {},
        )
    }
}

impl<S> Observable for Arc<S>
where
    S: Observable,
{
    type Item = S::Item;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<Self::Item> + Send + Sync + 'static,
    {
        (**self).subscribe(observer)
    }
}

impl<S> Observable for &S
where
    S: Observable,
{
    type Item = S::Item;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<Self::Item> + Send + Sync + 'static,
    {
        (**self).subscribe(observer)
    }
}
