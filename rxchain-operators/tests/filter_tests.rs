// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rxchain_core::{Observable, Subject};
use rxchain_operators::FilterExt;
use rxchain_test_utils::test_data::{contains_hoge, source_failure, tags};
use rxchain_test_utils::{ColdSource, Notification, RecordingObserver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_filter_forwards_matching_subsequence_in_order() {
    // Arrange
    let source = ColdSource::from_values(vec![5, 2, 8, 1, 9, 4, 7]);
    let recorder = RecordingObserver::new();

    // Act
    source.filter(|n| *n > 3).subscribe(recorder.clone());

    // Assert
    assert_eq!(recorder.values(), vec![5, 8, 9, 4, 7]);
    assert!(recorder.is_completed());
}

#[test]
fn test_filter_drops_rejected_values_silently() {
    // Arrange
    let source = ColdSource::from_values(tags());
    let recorder = RecordingObserver::new();

    // Act
    source.filter(contains_hoge).subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next("hoge".to_string()),
            Notification::Next("hogefuga".to_string()),
            Notification::Completed,
        ]
    );
}

#[test]
fn test_filter_rejecting_everything_still_completes() {
    // Arrange
    let source = ColdSource::from_values(vec![1, 3, 5]);
    let recorder = RecordingObserver::new();

    // Act
    source.filter(|n| n % 2 == 0).subscribe(recorder.clone());

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Completed]);
}

#[test]
fn test_filter_passes_error_through_unchanged() {
    // Arrange
    let source = ColdSource::failing_after(vec![1, 2], source_failure());
    let recorder = RecordingObserver::new();

    // Act
    source.filter(|n| *n == 2).subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(2), Notification::Error(source_failure())]
    );
}

#[test]
fn test_filter_calls_predicate_once_per_value() {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let source = ColdSource::from_values(1..=10);
    let recorder = RecordingObserver::new();

    // Act
    source
        .filter(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            n % 3 == 0
        })
        .subscribe(recorder.clone());

    // Assert
    assert_eq!(calls.load(Ordering::SeqCst), 10);
    assert_eq!(recorder.values(), vec![3, 6, 9]);
}

#[test]
fn test_filter_is_lazy_until_subscribed() {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let source = ColdSource::from_values(vec![1, 2, 3]);

    // Act
    let _filtered = source.clone().filter(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    });

    // Assert
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(source.subscribed_count(), 0);
}

#[test]
fn test_filter_returns_upstream_subscription() {
    // Arrange
    let source = ColdSource::endless(vec![1, 2]);
    let filtered = source.clone().filter(|_| true);

    // Act
    let subscription = filtered.subscribe(RecordingObserver::new());
    assert_eq!(source.released_count(), 0);
    subscription.unsubscribe();

    // Assert
    assert_eq!(source.released_count(), 1);
}

#[test]
fn test_filter_evaluates_synchronously_within_emission() {
    // Arrange
    let subject = Subject::<i32>::new();
    let recorder = RecordingObserver::new();
    subject
        .clone()
        .filter(|n| *n >= 10)
        .subscribe(recorder.clone());

    // Act & Assert
    subject.next(3).unwrap();
    assert!(recorder.is_empty());

    subject.next(12).unwrap();
    assert_eq!(recorder.values(), vec![12]);

    subject.complete().unwrap();
    assert!(recorder.is_completed());
}

#[test]
fn test_filter_drops_values_after_source_completed() {
    // Arrange
    let source = ColdSource::new(vec![
        Notification::Next(1),
        Notification::Completed,
        Notification::Next(2),
        Notification::Completed,
    ]);
    let recorder = RecordingObserver::new();

    // Act
    source.filter(|_| true).subscribe(recorder.clone());

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(1), Notification::Completed]
    );
}
