// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observer wrapper that enforces the terminal-signal grammar.

use crate::logging::log_warn;
use crate::{Observer, RxError};
use std::sync::atomic::{AtomicBool, Ordering};

/// Wraps an observer so it sees at most one terminal signal and nothing after it.
///
/// Once `on_error` or `on_completed` has been forwarded, every later signal is
/// dropped. Operators wrap their downstream observer in a `SafeObserver`, so a
/// terminal subscriber at the end of a chain always observes a well-formed
/// sequence even if the source misbehaves.
///
/// # Examples
///
/// ```
/// use rxchain_core::{CallbackObserver, Observer, SafeObserver};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let completions = Arc::new(AtomicUsize::new(0));
/// let counter = completions.clone();
/// let observer = SafeObserver::new(CallbackObserver::new(
///     |_: i32| {},
///     |_| {},
///     move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     },
/// ));
///
/// observer.on_completed();
/// observer.on_completed();
/// assert_eq!(completions.load(Ordering::SeqCst), 1);
/// ```
#[derive(Debug)]
pub struct SafeObserver<O> {
    inner: O,
    stopped: AtomicBool,
}

impl<O> SafeObserver<O> {
    /// Wraps `inner`.
    pub const fn new(inner: O) -> Self {
        Self {
            inner,
            stopped: AtomicBool::new(false),
        }
    }

    /// Returns `true` once a terminal signal has been forwarded.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Claims the single terminal slot. Returns `false` if it was already taken.
    fn stop(&self) -> bool {
        !self.stopped.swap(true, Ordering::AcqRel)
    }
}

impl<T, O> Observer<T> for SafeObserver<O>
where
    O: Observer<T>,
{
    fn on_next(&self, value: T) {
        if self.is_stopped() {
            log_warn!("on_next dropped: observer already received a terminal signal");
            return;
        }
        self.inner.on_next(value);
    }

    fn on_error(&self, error: RxError) {
        if !self.stop() {
            log_warn!(error = %error, "on_error dropped: observer already received a terminal signal");
            return;
        }
        self.inner.on_error(error);
    }

    fn on_completed(&self) {
        if !self.stop() {
            log_warn!("on_completed dropped: observer already received a terminal signal");
            return;
        }
        self.inner.on_completed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Null;

    impl Observer<()> for Null {
        fn on_next(&self, _value: ()) {}
        fn on_error(&self, _error: RxError) {}
        fn on_completed(&self) {}
    }

    #[test]
    fn test_terminal_slot_is_claimed_once() {
        let observer = SafeObserver::new(Null);
        assert!(observer.stop());
        assert!(!observer.stop());
        assert!(observer.is_stopped());
    }
}
