// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rxchain_core::RxError;

/// Error type returned by fallible test predicates and transforms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("test error: {0}")]
pub struct TestError(pub String);

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Tags emitted by the reference scenario, in emission order.
pub fn tags() -> Vec<String> {
    vec!["huga".to_string(), "hoge".to_string(), "hogefuga".to_string()]
}

#[allow(clippy::ptr_arg)]
pub fn contains_hoge(tag: &String) -> bool {
    tag.contains("hoge")
}

pub fn source_failure() -> RxError {
    RxError::stream_error("source failed")
}
