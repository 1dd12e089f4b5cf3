//! The [`Source`] capability and the raw implementors of it.
//!
//! Every fragment builder in this crate renders itself through `Source`, and
//! every builder that embeds children (inner hits, sorters) accepts any
//! `Source` implementor rather than a concrete type.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;

/// Anything that can render itself as a JSON fragment of a search request.
///
/// Implementations must be pure: calling `source` twice without mutating
/// the receiver yields equal values.
pub trait Source: Send + Sync {
    /// Render the fragment, or fail.
    fn source(&self) -> Result<Value>;
}

impl<T: Source + ?Sized> Source for Box<T> {
    fn source(&self) -> Result<Value> {
        (**self).source()
    }
}

impl<T: Source + ?Sized> Source for Arc<T> {
    fn source(&self) -> Result<Value> {
        (**self).source()
    }
}

impl<T: Source + ?Sized> Source for &T {
    fn source(&self) -> Result<Value> {
        (**self).source()
    }
}

impl Source for Value {
    fn source(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

/// A fragment that is already a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSource(pub Value);

impl RawSource {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl Source for RawSource {
    fn source(&self) -> Result<Value> {
        Ok(self.0.clone())
    }
}

/// A fragment held as unparsed JSON text.
///
/// The text is parsed on every call to [`Source::source`]; malformed input
/// fails there with [`SourceError::Json`](crate::SourceError::Json).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawJson(pub String);

impl RawJson {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Source for RawJson {
    fn source(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.0)?)
    }
}
