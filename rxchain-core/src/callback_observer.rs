// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observer backed by three caller-supplied handlers.

use crate::{Observer, Result, RxError};
use std::fmt;

type NextHandler<T> = Box<dyn Fn(T) + Send + Sync>;
type ErrorHandler = Box<dyn Fn(RxError) + Send + Sync>;
type CompletedHandler = Box<dyn Fn() + Send + Sync>;

/// An [`Observer`] that forwards each signal verbatim to its handler.
///
/// `CallbackObserver` holds no state of its own and does not police the
/// terminal-signal grammar; see [`SafeObserver`](crate::SafeObserver).
///
/// # Examples
///
/// ```
/// use rxchain_core::{CallbackObserver, Observer};
///
/// let observer = CallbackObserver::new(
///     |value: i32| println!("{value}"),
///     |error| eprintln!("{error}"),
///     || println!("completed"),
/// );
/// observer.on_next(1);
/// observer.on_completed();
/// ```
pub struct CallbackObserver<T> {
    on_next: NextHandler<T>,
    on_error: ErrorHandler,
    on_completed: CompletedHandler,
}

impl<T> CallbackObserver<T> {
    /// Creates an observer from all three handlers.
    pub fn new<N, E, C>(on_next: N, on_error: E, on_completed: C) -> Self
    where
        N: Fn(T) + Send + Sync + 'static,
        E: Fn(RxError) + Send + Sync + 'static,
        C: Fn() + Send + Sync + 'static,
    {
        Self {
            on_next: Box::new(on_next),
            on_error: Box::new(on_error),
            on_completed: Box::new(on_completed),
        }
    }

    /// Starts a validating builder.
    ///
    /// [`ObserverBuilder::build`] fails with [`RxError::MissingHandler`] if any
    /// handler was not supplied.
    #[must_use]
    pub fn builder() -> ObserverBuilder<T> {
        ObserverBuilder::default()
    }
}

impl<T> Observer<T> for CallbackObserver<T> {
    fn on_next(&self, value: T) {
        (self.on_next)(value);
    }

    fn on_error(&self, error: RxError) {
        (self.on_error)(error);
    }

    fn on_completed(&self) {
        (self.on_completed)();
    }
}

impl<T> fmt::Debug for CallbackObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackObserver").finish_non_exhaustive()
    }
}

/// Builder for [`CallbackObserver`] that validates at construction time.
///
/// # Examples
///
/// ```
/// use rxchain_core::{CallbackObserver, RxError};
///
/// let result = CallbackObserver::<i32>::builder()
///     .on_next(|_| {})
///     .on_error(|_| {})
///     .build();
///
/// assert_eq!(result.unwrap_err(), RxError::missing_handler("on_completed"));
/// ```
pub struct ObserverBuilder<T> {
    on_next: Option<NextHandler<T>>,
    on_error: Option<ErrorHandler>,
    on_completed: Option<CompletedHandler>,
}

impl<T> Default for ObserverBuilder<T> {
    fn default() -> Self {
        Self {
            on_next: None,
            on_error: None,
            on_completed: None,
        }
    }
}

impl<T> ObserverBuilder<T> {
    /// Sets the value handler.
    #[must_use]
    pub fn on_next<N>(mut self, on_next: N) -> Self
    where
        N: Fn(T) + Send + Sync + 'static,
    {
        self.on_next = Some(Box::new(on_next));
        self
    }

    /// Sets the error handler.
    #[must_use]
    pub fn on_error<E>(mut self, on_error: E) -> Self
    where
        E: Fn(RxError) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(on_error));
        self
    }

    /// Sets the completion handler.
    #[must_use]
    pub fn on_completed<C>(mut self, on_completed: C) -> Self
    where
        C: Fn() + Send + Sync + 'static,
    {
        self.on_completed = Some(Box::new(on_completed));
        self
    }

    /// Builds the observer.
    ///
    /// # Errors
    ///
    /// Returns [`RxError::MissingHandler`] naming the first absent handler,
    /// checked in the order `on_next`, `on_error`, `on_completed`.
    pub fn build(self) -> Result<CallbackObserver<T>> {
        let on_next = self
            .on_next
            .ok_or(RxError::missing_handler("on_next"))?;
        let on_error = self
            .on_error
            .ok_or(RxError::missing_handler("on_error"))?;
        let on_completed = self
            .on_completed
            .ok_or(RxError::missing_handler("on_completed"))?;

        Ok(CallbackObserver {
            on_next,
            on_error,
            on_completed,
        })
    }
}
