// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # rxchain
//!
//! A minimal push-based reactive library: a producer contract ([`Observable`])
//! broadcasting to consumer contracts ([`Observer`]), plus operators derived by
//! wrapping both sides of that contract.
//!
//! ## How an operator chain works
//!
//! `source.filter(p).map(f)` builds two small immutable values and nothing else.
//! When a terminal subscriber attaches:
//!
//! 1. `Map` wraps the terminal observer in an intermediate observer that applies `f`
//!    and subscribes it to `Filter`
//! 2. `Filter` wraps *that* observer in one that applies `p` and subscribes it to `source`
//! 3. `source` returns its subscription, which is handed back up unchanged
//!
//! Releasing the subscription the caller holds therefore releases the source link.
//! Values flow synchronously on the emitting thread with no buffering.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxchain::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let tags = Subject::<String>::new();
//! let lengths = tags.clone().filter(|t| t.contains("hoge")).map(|t| t.len());
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! let subscription = lengths.subscribe_with(
//!     move |n| sink.lock().unwrap().push(n),
//!     |e| eprintln!("{e}"),
//!     || println!("completed"),
//! );
//!
//! tags.next("huga".to_string()).unwrap();
//! tags.next("hoge".to_string()).unwrap();
//! tags.next("hogefuga".to_string()).unwrap();
//! subscription.unsubscribe();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![4, 8]);
//! ```
//!
//! ## Signal grammar and failures
//!
//! - Operators guarantee their downstream sees at most one terminal signal and
//!   nothing after it ([`SafeObserver`])
//! - `filter` / `map` let a panicking function unwind; `try_filter` / `try_map`
//!   turn `Err` into `on_error` and release the upstream link

pub use rxchain_core::{
    CallbackObservable, CallbackObserver, IntoRxError, Observable, Observer, ObserverBuilder,
    Result, RxError, SafeObserver, SharedObserver, Subject, SubjectError, Subscription,
    SubscriptionGuard,
};
pub use rxchain_operators::{
    Filter, FilterExt, Map, MapExt, TryFilter, TryFilterExt, TryMap, TryMapExt,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rxchain_core::{
        CallbackObservable, CallbackObserver, Observable, Observer, RxError, Subject,
        Subscription,
    };
    pub use rxchain_operators::prelude::*;
}
