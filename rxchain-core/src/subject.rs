// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject.
//!
//! A [`Subject`] broadcasts each value pushed through [`Subject::next`] to all
//! currently subscribed observers.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past values, only values pushed after subscribing.
//! - **Synchronous**: Observers are notified on the calling thread, in subscription order.
//! - **Shared**: Cheap to clone; all clones share the same internal state.
//! - **Error/complete**: A terminal signal reaches every subscriber and closes the subject.
//!   Subscribers arriving after that receive the terminal signal immediately.
//! - **Reentrant**: Observers may subscribe or unsubscribe from inside a callback.
//!   Each emission goes to the subscribers present when it started, so an observer
//!   released mid-emission still receives that value and nothing after it.
//!
//! ## Example
//!
//! ```
//! use rxchain_core::{Observable, Subject};
//! use std::sync::{Arc, Mutex};
//!
//! let subject = Subject::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = seen.clone();
//! let subscription = subject.subscribe_next(move |v| sink.lock().unwrap().push(v));
//!
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subscription.unsubscribe();
//! subject.next(3).unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use crate::logging::log_trace;
use crate::{Observable, Observer, RxError, SharedObserver, SubjectError, Subscription};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

#[derive(Clone)]
enum Terminal {
    Error(RxError),
    Completed,
}

struct SubjectState<T> {
    terminal: Option<Terminal>,
    next_id: u64,
    observers: Vec<(u64, SharedObserver<T>)>,
}

/// A hot broadcaster that fans values out to all current subscribers.
///
/// See the [module documentation](self) for details.
pub struct Subject<T> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + 'static> Subject<T> {
    /// Creates a new open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                terminal: None,
                next_id: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Pushes `value` to every current subscriber.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already delivered a terminal signal.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        let observers = self.snapshot()?;
        log_trace!(subscribers = observers.len(), "subject next");
        for observer in &observers {
            observer.on_next(value.clone());
        }
        Ok(())
    }

    /// Delivers `error` to every current subscriber and closes the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already delivered a terminal signal.
    pub fn error(&self, error: RxError) -> Result<(), SubjectError> {
        let observers = self.close_with(Terminal::Error(error.clone()))?;
        log_trace!(subscribers = observers.len(), "subject error");
        for observer in observers {
            observer.on_error(error.clone());
        }
        Ok(())
    }

    /// Completes every current subscriber and closes the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject already delivered a terminal signal.
    pub fn complete(&self) -> Result<(), SubjectError> {
        let observers = self.close_with(Terminal::Completed)?;
        log_trace!(subscribers = observers.len(), "subject completed");
        for observer in observers {
            observer.on_completed();
        }
        Ok(())
    }

    /// Returns `true` once a terminal signal has been delivered.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().terminal.is_some()
    }

    /// Returns the number of currently subscribed observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().observers.len()
    }

    // Observers are called outside the lock on this copy; changes take effect from the next emission.
    fn snapshot(&self) -> Result<Vec<SharedObserver<T>>, SubjectError> {
        let state = self.state.lock();
        if state.terminal.is_some() {
            return Err(SubjectError::Closed);
        }
        Ok(state
            .observers
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect())
    }

    fn close_with(&self, terminal: Terminal) -> Result<Vec<SharedObserver<T>>, SubjectError> {
        let mut state = self.state.lock();
        if state.terminal.is_some() {
            return Err(SubjectError::Closed);
        }
        state.terminal = Some(terminal);
        Ok(state
            .observers
            .drain(..)
            .map(|(_, observer)| observer)
            .collect())
    }
}

impl<T: Clone + 'static> Observable for Subject<T> {
    type Item = T;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T> + Send + Sync + 'static,
    {
        let mut state = self.state.lock();
        if let Some(terminal) = state.terminal.clone() {
            drop(state);
            match terminal {
                Terminal::Error(error) => observer.on_error(error),
                Terminal::Completed => observer.on_completed(),
            }
            return Subscription::empty();
        }

        let id = state.next_id;
        state.next_id += 1;
        state.observers.push((id, Arc::new(observer)));
        drop(state);

        let weak: Weak<Mutex<SubjectState<T>>> = Arc::downgrade(&self.state);
        Subscription::new(move || {
            if let Some(state) = weak.upgrade() {
                state.lock().observers.retain(|(other, _)| *other != id);
            }
        })
    }
}

impl<T: Clone + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Subject")
            .field("closed", &state.terminal.is_some())
            .field("subscribers", &state.observers.len())
            .finish()
    }
}
