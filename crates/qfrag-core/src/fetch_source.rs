//! `_source` filtering for inner hits.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::source::Source;

/// Controls whether, and which parts of, the stored `_source` is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSourceContext {
    pub fetch: bool,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl FetchSourceContext {
    pub fn new(fetch: bool) -> Self {
        Self {
            fetch,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Fetch only the given paths (wildcards allowed).
    pub fn include<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn exclude<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(paths.into_iter().map(Into::into));
        self
    }
}

impl Default for FetchSourceContext {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Source for FetchSourceContext {
    fn source(&self) -> Result<Value> {
        if !self.fetch {
            return Ok(Value::Bool(false));
        }
        if self.includes.is_empty() && self.excludes.is_empty() {
            return Ok(Value::Bool(true));
        }

        let filter = SourceFilter {
            includes: &self.includes,
            excludes: &self.excludes,
        };
        Ok(serde_json::to_value(filter)?)
    }
}

#[derive(Serialize)]
struct SourceFilter<'a> {
    #[serde(skip_serializing_if = "is_empty")]
    includes: &'a [String],
    #[serde(skip_serializing_if = "is_empty")]
    excludes: &'a [String],
}

fn is_empty(paths: &&[String]) -> bool {
    paths.is_empty()
}
