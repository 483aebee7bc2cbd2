// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fallible map: a failing transform becomes an `on_error` signal.

use crate::logging::log_warn;
use rxchain_core::{Observable, Observer, RxError, SafeObserver, Subscription};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Extension trait providing the `try_map` operator for observables.
pub trait TryMapExt: Observable + Sized {
    /// Like [`map`](crate::MapExt::map), but the transform may fail.
    ///
    /// `Err(e)` is delivered downstream as `on_error(RxError::UserError(e))`,
    /// the upstream link is released, and the transform is not called again
    /// for that subscription.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rxchain_core::Observable;
    /// use rxchain_operators::TryMapExt;
    /// use rxchain_test_utils::{ColdSource, RecordingObserver};
    ///
    /// let parsed = ColdSource::from_values(vec!["1", "x", "3"]).try_map(str::parse::<i32>);
    /// let recorder = RecordingObserver::new();
    /// parsed.subscribe(recorder.clone());
    ///
    /// assert_eq!(recorder.values(), vec![1]);
    /// assert!(recorder.errors()[0].is_user_error());
    /// ```
    fn try_map<U, E, F>(self, f: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Item) -> Result<U, E> + Send + Sync + 'static,
        E: Error + Send + Sync + 'static;
}

impl<S> TryMapExt for S
where
    S: Observable,
{
    fn try_map<U, E, F>(self, f: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Item) -> Result<U, E> + Send + Sync + 'static,
        E: Error + Send + Sync + 'static,
    {
        TryMap::new(self, f)
    }
}

/// Observable returned by [`TryMapExt::try_map`].
pub struct TryMap<S, F> {
    source: S,
    f: Arc<F>,
}

impl<S, F> TryMap<S, F> {
    /// Wraps `source` with a fallible transform `f`.
    pub fn new(source: S, f: F) -> Self {
        Self {
            source,
            f: Arc::new(f),
        }
    }
}

impl<S, F, U, E> Observable for TryMap<S, F>
where
    S: Observable,
    F: Fn(S::Item) -> Result<U, E> + Send + Sync + 'static,
    E: Error + Send + Sync + 'static,
{
    type Item = U;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<U> + Send + Sync + 'static,
    {
        let link = Subscription::empty();
        let upstream = self.source.subscribe(TryMapObserver {
            downstream: SafeObserver::new(observer),
            f: Arc::clone(&self.f),
            link: link.clone(),
        });
        link.add(upstream);
        link
    }
}

impl<S: Clone, F> Clone for TryMap<S, F> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for TryMap<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

struct TryMapObserver<O, F> {
    downstream: SafeObserver<O>,
    f: Arc<F>,
    link: Subscription,
}

impl<T, U, E, O, F> Observer<T> for TryMapObserver<O, F>
where
    O: Observer<U>,
    F: Fn(T) -> Result<U, E>,
    E: Error + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        if self.downstream.is_stopped() {
            return;
        }
        match (self.f)(value) {
            Ok(mapped) => self.downstream.on_next(mapped),
            Err(error) => {
                let error = RxError::user_error(error);
                log_warn!(error = %error, "try_map transform failed");
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
