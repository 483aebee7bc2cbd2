// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for rxchain.
//!
//! This crate is meant for tests and benches only, not for production code.
//!
//! # Key Types
//!
//! ## `RecordingObserver<T>`
//!
//! A cloneable observer that records every signal it receives:
//!
//! ```rust
//! use rxchain_core::Observer;
//! use rxchain_test_utils::{Notification, RecordingObserver};
//!
//! let recorder = RecordingObserver::new();
//! recorder.on_next(1);
//! recorder.on_completed();
//!
//! assert_eq!(recorder.values(), vec![1]);
//! assert_eq!(recorder.notifications().last(), Some(&Notification::Completed));
//! ```
//!
//! ## `ColdSource<T>`
//!
//! A scripted cold observable that replays the same notifications to every
//! subscriber and counts how often its subscriptions were released:
//!
//! ```rust
//! use rxchain_core::Observable;
//! use rxchain_test_utils::{ColdSource, RecordingObserver};
//!
//! let source = ColdSource::from_values(vec![1, 2, 3]);
//! let recorder = RecordingObserver::new();
//!
//! let subscription = source.subscribe(recorder.clone());
//! subscription.unsubscribe();
//!
//! assert_eq!(recorder.values(), vec![1, 2, 3]);
//! assert_eq!(source.released_count(), 1);
//! ```

pub mod cold_source;
pub mod notification;
pub mod recording_observer;
pub mod test_data;

pub use cold_source::ColdSource;
pub use notification::Notification;
pub use recording_observer::RecordingObserver;
pub use test_data::TestError;
