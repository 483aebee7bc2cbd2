// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Single-input, single-output operators over [`Observable`](rxchain_core::Observable).
//!
//! Every operator follows the same template:
//!
//! - **An immutable struct** holding the source observable and the operator function
//! - **An extension trait** so operators chain fluently: `source.filter(p).map(f)`
//! - **Subscribe-time wiring**: subscribing to the derived observable wraps the
//!   downstream observer in an intermediate observer and subscribes *that* to the
//!   source. The source's subscription is what the caller gets back, so releasing
//!   it releases the whole chain
//!
//! No values are buffered between stages and nothing runs until a terminal
//! subscriber attaches.
//!
//! ## Operators
//!
//! | Operator | Function | On failure |
//! |----------|----------|------------|
//! | [`filter`](FilterExt::filter) | `Fn(&T) -> bool` | panics propagate |
//! | [`map`](MapExt::map) | `Fn(T) -> U` | panics propagate |
//! | [`try_filter`](TryFilterExt::try_filter) | `Fn(&T) -> Result<bool, E>` | `on_error`, upstream released |
//! | [`try_map`](TryMapExt::try_map) | `Fn(T) -> Result<U, E>` | `on_error`, upstream released |
//!
//! # Example
//!
//! ```
//! use rxchain_core::{Observable, Subject};
//! use rxchain_operators::prelude::*;
//! use rxchain_test_utils::RecordingObserver;
//!
//! let tags = Subject::<String>::new();
//! let lengths = tags.clone().filter(|t| t.contains("hoge")).map(|t| t.len());
//!
//! let recorder = RecordingObserver::new();
//! lengths.subscribe(recorder.clone());
//!
//! for tag in ["huga", "hoge", "hogefuga"] {
//!     tags.next(tag.to_string()).unwrap();
//! }
//! assert_eq!(recorder.values(), vec![4, 8]);
//! ```

mod logging;

pub mod filter;
pub mod map;
pub mod prelude;
pub mod try_filter;
pub mod try_map;

pub use filter::{Filter, FilterExt};
pub use map::{Map, MapExt};
pub use try_filter::{TryFilter, TryFilterExt};
pub use try_map::{TryMap, TryMapExt};
