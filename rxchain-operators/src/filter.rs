// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator: forwards only the values a predicate accepts.

use rxchain_core::{Observable, Observer, RxError, SafeObserver, Subscription};
use std::fmt;
use std::sync::Arc;

/// Extension trait providing the `filter` operator for observables.
pub trait FilterExt: Observable + Sized {
    /// Derives an observable that forwards only values for which `predicate` holds.
    ///
    /// # Behavior
    ///
    /// - The predicate runs once per upstream value, synchronously and in
    ///   emission order; rejected values are dropped silently
    /// - `on_error` and `on_completed` pass through unchanged
    /// - Nothing happens until the derived observable is subscribed; each
    ///   subscription builds its own intermediate observer
    /// - A panicking predicate unwinds through the emitting call; use
    ///   [`try_filter`](crate::TryFilterExt::try_filter) to turn failures into `on_error`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rxchain_core::Observable;
    /// use rxchain_operators::FilterExt;
    /// use rxchain_test_utils::{ColdSource, RecordingObserver};
    ///
    /// let evens = ColdSource::from_values(1..=6).filter(|n| n % 2 == 0);
    /// let recorder = RecordingObserver::new();
    /// evens.subscribe(recorder.clone());
    ///
    /// assert_eq!(recorder.values(), vec![2, 4, 6]);
    /// assert!(recorder.is_completed());
    /// ```
    ///
    /// # See Also
    ///
    /// - [`MapExt::map`](crate::MapExt::map) - Transform values
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;
}

impl<S> FilterExt for S
where
    S: Observable,
{
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        Filter::new(self, predicate)
    }
}

/// Observable returned by [`FilterExt::filter`].
///
/// Holds only the source and the predicate; all wiring happens at subscribe time.
pub struct Filter<S, P> {
    source: S,
    predicate: Arc<P>,
}

impl<S, P> Filter<S, P> {
    /// Wraps `source`, keeping values for which `predicate` returns `true`.
    pub fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate: Arc::new(predicate),
        }
    }
}

impl<S, P> Observable for Filter<S, P>
where
    S: Observable,
    P: Fn(&S::Item) -> bool + Send + Sync + 'static,
{
    type Item = S::Item;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<S::Item> + Send + Sync + 'static,
    {
        self.source.subscribe(FilterObserver {
            downstream: SafeObserver::new(observer),
            predicate: Arc::clone(&self.predicate),
        })
    }
}

impl<S: Clone, P> Clone for Filter<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Filter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

struct FilterObserver<O, P> {
    downstream: SafeObserver<O>,
    predicate: Arc<P>,
}

impl<T, O, P> Observer<T> for FilterObserver<O, P>
where
    O: Observer<T>,
    P: Fn(&T) -> bool,
{
    fn on_next(&self, value: T) {
        if (self.predicate)(&value) {
            self.downstream.on_next(value);
        }
    }

    fn on_error(&self, error: RxError) {
        self.downstream.on_error(error);
    }

    fn on_completed(&self) {
        self.downstream.on_completed();
    }
}
