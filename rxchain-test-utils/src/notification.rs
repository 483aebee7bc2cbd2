// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rxchain_core::{Observer, RxError};

/// One signal as seen by an observer.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification<T> {
    Next(T),
    Error(RxError),
    Completed,
}

impl<T> Notification<T> {
    /// Replays this notification into `observer`.
    pub fn deliver<O>(self, observer: &O)
    where
        O: Observer<T> + ?Sized,
    {
        match self {
            Notification::Next(value) => observer.on_next(value),
            Notification::Error(error) => observer.on_error(error),
            Notification::Completed => observer.on_completed(),
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Notification::Error(_) | Notification::Completed)
    }
}
