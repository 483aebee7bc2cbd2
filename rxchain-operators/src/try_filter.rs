// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fallible filter: a failing predicate becomes an `on_error` signal.

use crate::logging::log_warn;
use rxchain_core::{Observable, Observer, RxError, SafeObserver, Subscription};
use std::error::Error;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Extension trait providing the `try_filter` operator for observables.
pub trait TryFilterExt: Observable + Sized {
    /// Like [`filter`](crate::FilterExt::filter), but the predicate may fail.
    ///
    /// `Err(e)` is delivered downstream as `on_error(RxError::UserError(e))`,
    /// the upstream link is released, and the predicate is not called again
    /// for that subscription.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rxchain_core::Observable;
    /// use rxchain_operators::TryFilterExt;
    /// use rxchain_test_utils::{ColdSource, RecordingObserver, TestError};
    ///
    /// let checked = ColdSource::from_values(vec![1, 2, -1, 4]).try_filter(|n| {
    ///     if *n < 0 {
    ///         Err(TestError::new("negative"))
    ///     } else {
    ///         Ok(n % 2 == 0)
    ///     }
    /// });
    /// let recorder = RecordingObserver::new();
    /// checked.subscribe(recorder.clone());
    ///
    /// assert_eq!(recorder.values(), vec![2]);
    /// assert_eq!(recorder.errors().len(), 1);
    /// assert!(!recorder.is_completed());
    /// ```
    fn try_filter<P, E>(self, predicate: P) -> TryFilter<Self, P, E>
    where
        P: Fn(&Self::Item) -> Result<bool, E> + Send + Sync + 'static,
        E: Error + Send + Sync + 'static;
}

impl<S> TryFilterExt for S
where
    S: Observable,
{
    fn try_filter<P, E>(self, predicate: P) -> TryFilter<Self, P, E>
    where
        P: Fn(&Self::Item) -> Result<bool, E> + Send + Sync + 'static,
        E: Error + Send + Sync + 'static,
    {
        TryFilter::new(self, predicate)
    }
}

/// Observable returned by [`TryFilterExt::try_filter`].
pub struct TryFilter<S, P, E> {
    source: S,
    predicate: Arc<P>,
    _error: PhantomData<fn() -> E>,
}

impl<S, P, E> TryFilter<S, P, E> {
    /// Wraps `source` with a fallible `predicate`.
    pub fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate: Arc::new(predicate),
            _error: PhantomData,
        }
    }
}

impl<S, P, E> Observable for TryFilter<S, P, E>
where
    S: Observable,
    P: Fn(&S::Item) -> Result<bool, E> + Send + Sync + 'static,
    E: Error + Send + Sync + 'static,
{
    type Item = S::Item;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<S::Item> + Send + Sync + 'static,
    {
        let link = Subscription::empty();
        let upstream = self.source.subscribe(TryFilterObserver {
            downstream: SafeObserver::new(observer),
            predicate: Arc::clone(&self.predicate),
            link: link.clone(),
            _error: PhantomData,
        });
        link.add(upstream);
        link
    }
}

impl<S: Clone, P, E> Clone for TryFilter<S, P, E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Arc::clone(&self.predicate),
            _error: PhantomData,
        }
    }
}

impl<S: fmt::Debug, P, E> fmt::Debug for TryFilter<S, P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFilter")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

struct TryFilterObserver<O, P, E> {
    downstream: SafeObserver<O>,
    predicate: Arc<P>,
    link: Subscription,
    _error: PhantomData<fn() -> E>,
}

impl<T, O, P, E> Observer<T> for TryFilterObserver<O, P, E>
where
    O: Observer<T>,
    P: Fn(&T) -> Result<bool, E>,
    E: Error + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        if self.downstream.is_stopped() {
            return;
        }
        match (self.predicate)(&value) {
            Ok(true) => self.downstream.on_next(value),
            Ok(false) => {}
            Err(error) => {
                let error = RxError::user_error(error);
                log_warn!(error = %error, "try_filter predicate failed");
                self.downstream.on_error(error);
                self.link.unsubscribe();
            }
        }
    }

    fn on_error(&self, error: RxError) {
        self.downstream.on_error(error);
    }

    fn on_completed(&self) {
        self.downstream.on_completed();
    }
}
