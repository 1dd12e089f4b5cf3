//! Test doubles for the `Source` capability.
//!
//! These are designed for readability in test assertions, not for
//! production use.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use qfrag::{InnerHit, RawSource, Source, SortInfo, SourceError};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// FailingSource
// ---------------------------------------------------------------------------

/// A `Source` that always fails with `SourceError::Other(message)`.
#[derive(Debug, Clone)]
pub struct FailingSource {
    pub message: &'static str,
}

impl FailingSource {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl Source for FailingSource {
    fn source(&self) -> qfrag::Result<Value> {
        Err(SourceError::other(self.message))
    }
}

// ---------------------------------------------------------------------------
// CountingSource
// ---------------------------------------------------------------------------

/// A `Source` that records how many times it was rendered.
///
/// Clones share the counter, so keep one clone outside the builder to read
/// it back.
#[derive(Debug, Clone)]
pub struct CountingSource {
    value: Value,
    calls: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Source for CountingSource {
    fn source(&self) -> qfrag::Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.value.clone())
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// An inner hit that renders as `{"name": name}`.
pub fn named(name: &str) -> RawSource {
    RawSource::new(json!({ "name": name }))
}

/// The canonical "last tweets" inner hit.
pub fn last_tweets() -> InnerHit {
    InnerHit::new()
        .name("last_tweets")
        .size(5)
        .sort(SortInfo::new("date").asc())
}
