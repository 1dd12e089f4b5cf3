//! Inner hits, the per-group expansion inside a collapse clause.
//!
//! Each collapsed group can be expanded with one or more inner hit
//! definitions, each returning its own top documents for the group.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::collapse::CollapseBuilder;
use crate::error::Result;
use crate::fetch_source::FetchSourceContext;
use crate::source::Source;

/// Fluent builder for a single `inner_hits` definition.
///
/// Only options that were set are rendered; an untouched `InnerHit` renders
/// as `{}`.
#[derive(Clone, Default)]
pub struct InnerHit {
    name: Option<String>,
    from: Option<i64>,
    size: Option<i64>,
    sorters: Vec<Arc<dyn Source>>,
    explain: Option<bool>,
    version: Option<bool>,
    seq_no_primary_term: Option<bool>,
    track_scores: Option<bool>,
    stored_fields: Vec<String>,
    docvalue_fields: Vec<String>,
    fetch_source: Option<FetchSourceContext>,
    collapse: Option<Box<CollapseBuilder>>,
}

impl InnerHit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name under which the expanded documents appear in the response.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Offset of the first expanded document, rendered as `from`.
    pub fn from_offset(mut self, from: i64) -> Self {
        self.from = Some(from);
        self
    }

    /// Maximum number of expanded documents per group.
    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Append a sorter.
    pub fn sort(mut self, sorter: impl Source + 'static) -> Self {
        self.sorters.push(Arc::new(sorter));
        self
    }

    /// Append several sorters, in order.
    pub fn sort_by<I, S>(mut self, sorters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Source + 'static,
    {
        self.sorters.extend(
            sorters
                .into_iter()
                .map(|sorter| Arc::new(sorter) as Arc<dyn Source>),
        );
        self
    }

    /// Include score explanations for the expanded documents.
    pub fn explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }

    pub fn version(mut self, version: bool) -> Self {
        self.version = Some(version);
        self
    }

    pub fn seq_no_primary_term(mut self, enabled: bool) -> Self {
        self.seq_no_primary_term = Some(enabled);
        self
    }

    pub fn track_scores(mut self, track_scores: bool) -> Self {
        self.track_scores = Some(track_scores);
        self
    }

    pub fn stored_field(mut self, field: impl Into<String>) -> Self {
        self.stored_fields.push(field.into());
        self
    }

    pub fn docvalue_field(mut self, field: impl Into<String>) -> Self {
        self.docvalue_fields.push(field.into());
        self
    }

    pub fn fetch_source(mut self, fetch: bool) -> Self {
        self.fetch_source = Some(match self.fetch_source.take() {
            Some(ctx) => FetchSourceContext { fetch, ..ctx },
            None => FetchSourceContext::new(fetch),
        });
        self
    }

    pub fn fetch_source_context(mut self, ctx: FetchSourceContext) -> Self {
        self.fetch_source = Some(ctx);
        self
    }

    /// Collapse the expanded documents again on a second field.
    pub fn collapse(mut self, collapse: CollapseBuilder) -> Self {
        self.collapse = Some(Box::new(collapse));
        self
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_size(&self) -> Option<i64> {
        self.size
    }
}

impl Source for InnerHit {
    fn source(&self) -> Result<Value> {
        let mut src = Map::new();

        if let Some(name) = &self.name {
            src.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(from) = self.from {
            src.insert("from".into(), Value::from(from));
        }
        if let Some(size) = self.size {
            src.insert("size".into(), Value::from(size));
        }
        if !self.sorters.is_empty() {
            let sort = self
                .sorters
                .iter()
                .map(|sorter| sorter.source())
                .collect::<Result<Vec<_>>>()?;
            src.insert("sort".into(), Value::Array(sort));
        }

        let flags = [
            ("explain", self.explain),
            ("version", self.version),
            ("seq_no_primary_term", self.seq_no_primary_term),
            ("track_scores", self.track_scores),
        ];
        for (key, flag) in flags {
            if let Some(flag) = flag {
                src.insert(key.into(), Value::Bool(flag));
            }
        }

        if !self.stored_fields.is_empty() {
            src.insert("stored_fields".into(), Value::from(self.stored_fields.clone()));
        }
        if !self.docvalue_fields.is_empty() {
            src.insert(
                "docvalue_fields".into(),
                Value::from(self.docvalue_fields.clone()),
            );
        }
        if let Some(ctx) = &self.fetch_source {
            src.insert("_source".into(), ctx.source()?);
        }
        if let Some(collapse) = &self.collapse {
            src.insert("collapse".into(), collapse.source()?);
        }

        Ok(Value::Object(src))
    }
}

impl fmt::Debug for InnerHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InnerHit")
            .field("name", &self.name)
            .field("from", &self.from)
            .field("size", &self.size)
            .field("sorters", &self.sorters.len())
            .field("collapse", &self.collapse)
            .finish_non_exhaustive()
    }
}
