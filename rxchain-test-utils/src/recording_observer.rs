// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Notification;
use parking_lot::Mutex;
use rxchain_core::{Observer, RxError};
use std::sync::Arc;

/// Observer that records every signal it receives, in order.
///
/// Clones share the same log, so one clone can be handed to `subscribe` while
/// the test keeps another for assertions.
#[derive(Debug)]
pub struct RecordingObserver<T> {
    log: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T> RecordingObserver<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All recorded signals.
    pub fn notifications(&self) -> Vec<Notification<T>>
    where
        T: Clone,
    {
        self.log.lock().clone()
    }

    /// The `on_next` payloads, in arrival order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.log
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// The `on_error` payloads, in arrival order.
    pub fn errors(&self) -> Vec<RxError> {
        self.log
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Error(error) => Some(error.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.log
            .lock()
            .iter()
            .filter(|n| matches!(n, Notification::Completed))
            .count()
    }

    pub fn is_completed(&self) -> bool {
        self.completed_count() > 0
    }

    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }

    fn record(&self, notification: Notification<T>) {
        self.log.lock().push(notification);
    }
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordingObserver<T> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}

impl<T> Observer<T> for RecordingObserver<T> {
    fn on_next(&self, value: T) {
        self.record(Notification::Next(value));
    }

    fn on_error(&self, error: RxError) {
        self.record(Notification::Error(error));
    }

    fn on_completed(&self) {
        self.record(Notification::Completed);
    }
}
