// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator: transforms every value one-to-one.

use rxchain_core::{Observable, Observer, RxError, SafeObserver, Subscription};
use std::fmt;
use std::sync::Arc;

/// Extension trait providing the `map` operator for observables.
pub trait MapExt: Observable + Sized {
    /// Derives an observable that forwards `f(value)` for every upstream value.
    ///
    /// # Behavior
    ///
    /// - `f` runs exactly once per upstream value, synchronously and in order,
    ///   with no memoization; the output type may differ from the input type
    /// - `on_error` and `on_completed` pass through unchanged
    /// - A panicking `f` unwinds through the emitting call; use
    ///   [`try_map`](crate::TryMapExt::try_map) to turn failures into `on_error`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rxchain_core::Observable;
    /// use rxchain_operators::MapExt;
    /// use rxchain_test_utils::{ColdSource, RecordingObserver};
    ///
    /// let lengths = ColdSource::from_values(vec!["a", "bcd"]).map(str::len);
    /// let recorder = RecordingObserver::new();
    /// lengths.subscribe(recorder.clone());
    ///
    /// assert_eq!(recorder.values(), vec![1, 3]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`FilterExt::filter`](crate::FilterExt::filter) - Drop values
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U + Send + Sync + 'static;
}

impl<S> MapExt for S
where
    S: Observable,
{
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U + Send + Sync + 'static,
    {
        Map::new(self, f)
    }
}

/// Observable returned by [`MapExt::map`].
pub struct Map<S, F> {
    source: S,
    f: Arc<F>,
}

impl<S, F> Map<S, F> {
    /// Wraps `source`, transforming each value with `f`.
    pub fn new(source: S, f: F) -> Self {
        Self {
            source,
            f: Arc::new(f),
        }
    }
}

impl<S, F, U> Observable for Map<S, F>
where
    S: Observable,
    F: Fn(S::Item) -> U + Send + Sync + 'static,
{
    type Item = U;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<U> + Send + Sync + 'static,
    {
        self.source.subscribe(MapObserver {
            downstream: SafeObserver::new(observer),
            f: Arc::clone(&self.f),
        })
    }
}

impl<S: Clone, F> Clone for Map<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

struct MapObserver<O, F> {
    downstream: SafeObserver<O>,
    f: Arc<F>,
}

impl<T, U, O, F> Observer<T> for MapObserver<O, F>
where
    O: Observer<U>,
    F: Fn(T) -> U,
{
    fn on_next(&self, value: T) {
        self.downstream.on_next((self.f)(value));
    }

    fn on_error(&self, error: RxError) {
        self.downstream.on_error(error);
    }

    fn on_completed(&self) {
        self.downstream.on_completed();
    }
}
