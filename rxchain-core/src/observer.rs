// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The push-notification receiver contract.

use crate::RxError;
use std::sync::Arc;

/// A place three kinds of signals can be pushed to.
///
/// Signals arrive synchronously on the thread that triggered the emission.
/// By convention a subscription delivers zero or more `on_next` calls followed
/// by at most one of `on_error` / `on_completed`. Implementations of this trait
/// are not required to enforce that grammar; wrap an observer in
/// [`SafeObserver`](crate::SafeObserver) to have it enforced.
pub trait Observer<T> {
    /// Delivers one data item.
    fn on_next(&self, value: T);

    /// Delivers a terminal error signal.
    fn on_error(&self, error: RxError);

    /// Delivers a terminal success signal.
    fn on_completed(&self);
}

impl<T, O> Observer<T> for Arc<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: RxError) {
        (**self).on_error(error);
    }

    fn on_completed(&self) {
        (**self).on_completed();
    }
}

impl<T, O> Observer<T> for Box<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: RxError) {
        (**self).on_error(error);
    }

    fn on_completed(&self) {
        (**self).on_completed();
    }
}

/// Type-erased, shareable observer.
pub type SharedObserver<T> = Arc<dyn Observer<T> + Send + Sync>;
