// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for composed operator chains.

use rxchain::prelude::*;
use rxchain::SharedObserver;
use rxchain_test_utils::test_data::source_failure;
use rxchain_test_utils::{ColdSource, Notification, RecordingObserver, TestError};
use std::panic::{catch_unwind, AssertUnwindSafe};

#[test]
fn test_error_passes_unchanged_through_many_layers() {
    // Arrange
    let recorder = RecordingObserver::new();
    let chain = ColdSource::failing_after(vec![1, 2, 3], source_failure())
        .filter(|n: &i32| *n != 2)
        .map(|n| n * 10)
        .filter(|n| *n > 0)
        .map(|n| n.to_string());

    // Act
    chain.subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next("10".to_string()),
            Notification::Next("30".to_string()),
            Notification::Error(source_failure()),
        ]
    );
}

#[test]
fn test_user_error_identity_survives_the_chain() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let recorder = RecordingObserver::new();
    subject
        .clone()
        .map(|n| n + 1)
        .filter(|_| true)
        .subscribe(recorder.clone());
    let error = RxError::user_error(TestError::new("sensor offline"));

    // Act
    subject.error(error.clone())?;

    // Assert
    assert_eq!(recorder.errors(), vec![error]);
    Ok(())
}

#[test]
fn test_completion_passes_through_filter_that_rejects_everything() {
    let recorder = RecordingObserver::new();

    ColdSource::from_values(vec![1, 2, 3])
        .filter(|_| false)
        .map(|n: i32| n)
        .subscribe(recorder.clone());

    assert_eq!(recorder.notifications(), vec![Notification::Completed]);
}

#[test]
fn test_misbehaving_source_is_sanitised_for_terminal_subscriber() {
    // Arrange
    let source = CallbackObservable::new(|observer: SharedObserver<i32>| {
        observer.on_next(1);
        observer.on_completed();
        observer.on_next(2);
        observer.on_error(RxError::stream_error("after completion"));
        observer.on_completed();
        Subscription::empty()
    });
    let recorder = RecordingObserver::new();

    // Act
    source.map(|n| n * 2).subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(2), Notification::Completed]
    );
}

#[test]
fn test_try_map_failure_in_the_middle_of_a_chain() {
    // Arrange
    let recorder = RecordingObserver::new();
    let source = ColdSource::from_values(vec!["4", "8", "oops", "16"]);

    // Act
    let subscription = source
        .clone()
        .filter(|s| !s.is_empty())
        .try_map(str::parse::<u32>)
        .map(|n| n / 4)
        .subscribe(recorder.clone());

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert_eq!(recorder.errors().len(), 1);
    assert!(recorder.errors()[0].is_user_error());
    assert!(!recorder.is_completed());
    assert!(subscription.is_closed());
    assert_eq!(source.released_count(), 1);
}

#[test]
fn test_try_filter_failure_stops_downstream_map() {
    let recorder = RecordingObserver::new();

    ColdSource::from_values(vec![2, 4, 5, 6])
        .try_filter(|n: &i32| {
            if n % 2 == 0 {
                Ok(true)
            } else {
                Err(TestError::new(format!("odd value {n}")))
            }
        })
        .map(|n| n * n)
        .subscribe(recorder.clone());

    assert_eq!(recorder.values(), vec![4, 16]);
    assert_eq!(
        recorder.errors()[0].to_string(),
        "User error: test error: odd value 5"
    );
}

#[test]
fn test_panicking_transform_unwinds_through_emission() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let recorder = RecordingObserver::new();
    subject
        .clone()
        .map(|n| {
            assert!(n != 0, "transform rejected zero");
            n
        })
        .subscribe(recorder.clone());

    // Act
    let outcome = catch_unwind(AssertUnwindSafe(|| subject.next(0)));

    // Assert
    assert!(outcome.is_err());
    assert!(recorder.errors().is_empty());

    subject.next(1)?;
    assert_eq!(recorder.values(), vec![1]);
    Ok(())
}
