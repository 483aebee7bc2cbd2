// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scripted cold observable for tests.

use crate::Notification;
use rxchain_core::{Observable, Observer, RxError, Subscription};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A cold observable that replays a fixed script to every subscriber.
///
/// Each `subscribe` call delivers the whole script synchronously and returns a
/// subscription whose release is counted, so tests can verify that disposing
/// the end of a chain reaches the source.
#[derive(Debug, Clone)]
pub struct ColdSource<T> {
    script: Arc<Vec<Notification<T>>>,
    subscribed: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl<T: Clone> ColdSource<T> {
    pub fn new(script: Vec<Notification<T>>) -> Self {
        Self {
            script: Arc::new(script),
            subscribed: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Emits `values` and then completes.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut script: Vec<_> = values.into_iter().map(Notification::Next).collect();
        script.push(Notification::Completed);
        Self::new(script)
    }

    /// Emits `values` and then fails with `error`.
    pub fn failing_after(values: impl IntoIterator<Item = T>, error: RxError) -> Self {
        let mut script: Vec<_> = values.into_iter().map(Notification::Next).collect();
        script.push(Notification::Error(error));
        Self::new(script)
    }

    /// Emits `values` without ever terminating.
    pub fn endless(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(values.into_iter().map(Notification::Next).collect())
    }

    /// Number of times `subscribe` has been called.
    pub fn subscribed_count(&self) -> usize {
        self.subscribed.load(Ordering::SeqCst)
    }

    /// Number of subscriptions that have been released.
    pub fn released_count(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl<T: Clone + 'static> Observable for ColdSource<T> {
    type Item = T;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T> + Send + Sync + 'static,
    {
        self.subscribed.fetch_add(1, Ordering::SeqCst);
        for notification in self.script.iter().cloned() {
            notification.deliver(&observer);
        }

        let released = Arc::clone(&self.released);
        Subscription::new(move || {
            released.fetch_add(1, Ordering::SeqCst);
        })
    }
}
