// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core contracts for rxchain.
//!
//! - [`Observer`]: receives `on_next`, `on_error` and `on_completed` signals.
//! - [`Observable`]: accepts an observer and returns a [`Subscription`].
//! - [`CallbackObserver`] / [`CallbackObservable`]: closure-backed implementations.
//! - [`SafeObserver`]: enforces "at most one terminal signal, nothing after it".
//! - [`Subject`]: a hot broadcaster driven imperatively.

mod logging;

pub mod callback_observable;
pub mod callback_observer;
pub mod error;
pub mod observable;
pub mod observer;
pub mod safe_observer;
pub mod subject;
pub mod subscription;

pub use self::callback_observable::CallbackObservable;
pub use self::callback_observer::{CallbackObserver, ObserverBuilder};
pub use self::error::{IntoRxError, Result, RxError, SubjectError};
pub use self::observable::Observable;
pub use self::observer::{Observer, SharedObserver};
pub use self::safe_observer::SafeObserver;
pub use self::subject::Subject;
pub use self::subscription::{Subscription, SubscriptionGuard};
