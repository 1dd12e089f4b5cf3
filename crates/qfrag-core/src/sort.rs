//! Sort clauses used inside inner hits.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::source::Source;

/// Sort on a document field.
///
/// With nothing but an order set this renders in the short form
/// `{"date": "asc"}`; any extra option switches to the long form
/// `{"date": {"order": "asc", ...}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortInfo {
    pub field: String,
    pub ascending: bool,
    pub missing: Option<Value>,
    pub unmapped_type: Option<String>,
    pub mode: Option<String>,
}

impl SortInfo {
    /// Ascending sort on `field`.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
            missing: None,
            unmapped_type: None,
            mode: None,
        }
    }

    pub fn asc(mut self) -> Self {
        self.ascending = true;
        self
    }

    pub fn desc(mut self) -> Self {
        self.ascending = false;
        self
    }

    pub fn order(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Value used for documents lacking the field (`"_last"`, `"_first"` or
    /// a literal).
    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    pub fn unmapped_type(mut self, unmapped_type: impl Into<String>) -> Self {
        self.unmapped_type = Some(unmapped_type.into());
        self
    }

    /// Multi-value mode: `min`, `max`, `sum`, `avg` or `median`.
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    fn is_short_form(&self) -> bool {
        self.missing.is_none() && self.unmapped_type.is_none() && self.mode.is_none()
    }
}

impl Source for SortInfo {
    fn source(&self) -> Result<Value> {
        let order = order_str(self.ascending);
        if self.is_short_form() {
            return Ok(json!({ self.field.as_str(): order }));
        }

        let opts = SortOptions {
            order,
            missing: self.missing.as_ref(),
            unmapped_type: self.unmapped_type.as_deref(),
            mode: self.mode.as_deref(),
        };
        let body = serde_json::to_value(opts)?;
        Ok(json!({ self.field.as_str(): body }))
    }
}

/// Long-form body of a field sort.
#[derive(Serialize)]
struct SortOptions<'a> {
    order: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unmapped_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'a str>,
}

/// Sort on relevance score. Descending unless flipped with [`asc`](Self::asc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSort {
    pub ascending: bool,
}

impl ScoreSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asc(mut self) -> Self {
        self.ascending = true;
        self
    }

    pub fn desc(mut self) -> Self {
        self.ascending = false;
        self
    }
}

impl Source for ScoreSort {
    fn source(&self) -> Result<Value> {
        Ok(json!({ "_score": { "order": order_str(self.ascending) } }))
    }
}

fn order_str(ascending: bool) -> &'static str {
    if ascending {
        "asc"
    } else {
        "desc"
    }
}
