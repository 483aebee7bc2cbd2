// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rxchain_core::{CallbackObserver, Observable, RxError, Subject, SubjectError, Subscription};
use rxchain_test_utils::{Notification, RecordingObserver};
use std::sync::Arc;

#[test]
fn test_subject_broadcasts_to_all_subscribers() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<&str>::new();
    let first = RecordingObserver::new();
    let second = RecordingObserver::new();
    subject.subscribe(first.clone());
    subject.subscribe(second.clone());

    // Act
    subject.next("hoge")?;
    subject.next("fuga")?;

    // Assert
    assert_eq!(first.values(), vec!["hoge", "fuga"]);
    assert_eq!(second.values(), vec!["hoge", "fuga"]);
    Ok(())
}

#[test]
fn test_subject_notifies_in_subscription_order() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    for id in 0..3 {
        let order = order.clone();
        subject.subscribe_next(move |v| order.lock().push((id, v)));
    }

    // Act
    subject.next(7)?;

    // Assert
    assert_eq!(*order.lock(), vec![(0, 7), (1, 7), (2, 7)]);
    Ok(())
}

#[test]
fn test_late_subscriber_misses_earlier_values() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    subject.next(1)?;

    let recorder = RecordingObserver::new();
    subject.subscribe(recorder.clone());
    subject.next(2)?;

    assert_eq!(recorder.values(), vec![2]);
    Ok(())
}

#[test]
fn test_unsubscribe_removes_observer() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    let recorder = RecordingObserver::new();
    let subscription = subject.subscribe(recorder.clone());
    assert_eq!(subject.subscriber_count(), 1);

    subscription.unsubscribe();
    subject.next(1)?;

    assert_eq!(subject.subscriber_count(), 0);
    assert!(recorder.is_empty());
    Ok(())
}

#[test]
fn test_complete_closes_subject() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    let recorder = RecordingObserver::new();
    subject.subscribe(recorder.clone());

    subject.complete()?;

    assert!(subject.is_closed());
    assert_eq!(subject.subscriber_count(), 0);
    assert_eq!(subject.next(1), Err(SubjectError::Closed));
    assert_eq!(subject.complete(), Err(SubjectError::Closed));
    assert_eq!(
        subject.error(RxError::stream_error("x")),
        Err(SubjectError::Closed)
    );
    assert_eq!(recorder.notifications(), vec![Notification::Completed]);
    Ok(())
}

#[test]
fn test_error_reaches_every_subscriber() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    let first = RecordingObserver::new();
    let second = RecordingObserver::new();
    subject.subscribe(first.clone());
    subject.subscribe(second.clone());

    subject.error(RxError::stream_error("broken"))?;

    let expected = vec![Notification::Error(RxError::stream_error("broken"))];
    assert_eq!(first.notifications(), expected);
    assert_eq!(second.notifications(), expected);
    Ok(())
}

#[test]
fn test_subscriber_after_terminal_receives_it_immediately() -> anyhow::Result<()> {
    let subject = Subject::<i32>::new();
    subject.error(RxError::stream_error("gone"))?;

    let recorder = RecordingObserver::new();
    let subscription = subject.subscribe(recorder.clone());

    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(RxError::stream_error("gone"))]
    );
    assert_eq!(subject.subscriber_count(), 0);
    subscription.unsubscribe();
    Ok(())
}

#[test]
fn test_observer_may_unsubscribe_during_emission() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let (slot_in, seen_in) = (slot.clone(), seen.clone());
    let subscription = subject.subscribe(CallbackObserver::new(
        move |v| {
            seen_in.lock().push(v);
            if let Some(subscription) = slot_in.lock().as_ref() {
                subscription.unsubscribe();
            }
        },
        |_| {},
        || {},
    ));
    *slot.lock() = Some(subscription);

    // Act
    subject.next(1)?;
    subject.next(2)?;

    // Assert
    assert_eq!(*seen.lock(), vec![1]);
    assert_eq!(subject.subscriber_count(), 0);
    Ok(())
}

#[test]
fn test_observer_released_mid_emission_still_receives_that_value() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<i32>::new();
    let second = RecordingObserver::new();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let slot_in = slot.clone();
    let _first = subject.subscribe(CallbackObserver::new(
        move |_: i32| {
            if let Some(subscription) = slot_in.lock().as_ref() {
                subscription.unsubscribe();
            }
        },
        |_| {},
        || {},
    ));
    *slot.lock() = Some(subject.subscribe(second.clone()));

    // Act
    subject.next(1)?;
    subject.next(2)?;

    // Assert
    assert_eq!(second.values(), vec![1]);
    assert_eq!(subject.subscriber_count(), 1);
    Ok(())
}

#[test]
fn test_clones_share_state() -> anyhow::Result<()> {
    let subject = Subject::<u8>::new();
    let clone = subject.clone();
    let recorder = RecordingObserver::new();
    clone.subscribe(recorder.clone());

    subject.next(4)?;

    assert_eq!(recorder.values(), vec![4]);
    assert_eq!(clone.subscriber_count(), 1);
    Ok(())
}
