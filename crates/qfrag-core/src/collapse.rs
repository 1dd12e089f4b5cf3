//! Field collapsing: the `collapse` clause of a search request.
//!
//! Collapsing reduces a result set to one top document per distinct value of
//! a field. Optional inner hits expand each group with further documents.
//!
//! ```text
//! {
//!   "field": "user",
//!   "inner_hits": { "name": "last_tweets", "size": 5, "sort": [{ "date": "asc" }] },
//!   "max_concurrent_group_searches": 4
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::source::Source;

/// Fluent builder for the `collapse` clause.
///
/// Nothing is validated: an empty field or a negative concurrency limit are
/// rendered as given and left for the search engine to judge.
#[derive(Clone, Default)]
pub struct CollapseBuilder {
    field: String,
    inner_hits: Vec<Arc<dyn Source>>,
    max_concurrent_group_searches: Option<i64>,
}

impl CollapseBuilder {
    /// Collapse on `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    /// Field to collapse on.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Replace the inner hits with `hits`, in order. An empty iterator clears
    /// them.
    pub fn inner_hits<I, S>(mut self, hits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Source + 'static,
    {
        self.inner_hits = hits
            .into_iter()
            .map(|hit| Arc::new(hit) as Arc<dyn Source>)
            .collect();
        self
    }

    /// Replace the inner hits with the single definition `hit`.
    pub fn inner_hit(self, hit: impl Source + 'static) -> Self {
        self.inner_hits([hit])
    }

    /// Maximum number of group requests run concurrently during the inner
    /// hits phase.
    pub fn max_concurrent_group_searches(mut self, max: i64) -> Self {
        self.max_concurrent_group_searches = Some(max);
        self
    }

    /// Alias of [`max_concurrent_group_searches`](Self::max_concurrent_group_searches).
    pub fn max_concurrent_group_requests(self, max: i64) -> Self {
        self.max_concurrent_group_searches(max)
    }

    pub fn get_field(&self) -> &str {
        &self.field
    }

    pub fn inner_hit_count(&self) -> usize {
        self.inner_hits.len()
    }

    pub fn get_max_concurrent_group_searches(&self) -> Option<i64> {
        self.max_concurrent_group_searches
    }
}

impl Source for CollapseBuilder {
    fn source(&self) -> Result<Value> {
        tracing::trace!(
            field = %self.field,
            inner_hits = self.inner_hits.len(),
            "rendering collapse clause"
        );

        let mut src = Map::new();
        src.insert("field".into(), Value::String(self.field.clone()));

        match self.inner_hits.as_slice() {
            [] => {}
            [hit] => {
                src.insert("inner_hits".into(), render_inner_hit(0, &**hit)?);
            }
            hits => {
                let rendered = hits
                    .iter()
                    .enumerate()
                    .map(|(i, hit)| render_inner_hit(i, &**hit))
                    .collect::<Result<Vec<_>>>()?;
                src.insert("inner_hits".into(), Value::Array(rendered));
            }
        }

        if let Some(max) = self.max_concurrent_group_searches {
            src.insert("max_concurrent_group_searches".into(), Value::from(max));
        }

        Ok(Value::Object(src))
    }
}

fn render_inner_hit(index: usize, hit: &dyn Source) -> Result<Value> {
    hit.source().inspect_err(|err| {
        tracing::debug!(index, error = %err, "inner hit failed to render");
    })
}

impl fmt::Debug for CollapseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollapseBuilder")
            .field("field", &self.field)
            .field("inner_hits", &self.inner_hits.len())
            .field(
                "max_concurrent_group_searches",
                &self.max_concurrent_group_searches,
            )
            .finish()
    }
}
