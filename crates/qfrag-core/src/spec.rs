//! Textual inner hit definitions, as typed on a command line.
//!
//! Two shapes are accepted:
//!
//! - a raw JSON object (`{"name":"last_tweets","size":5}`), kept verbatim and
//!   parsed only when rendered;
//! - a comma list of `key=value` pairs
//!   (`name=last_tweets,size=5,sort=date:asc`).
//!
//! Recognised keys: `name`, `from`, `size`, `sort` (repeatable,
//! `field[:asc|:desc]`), `explain`, `version`, `track_scores`, `source`.

use std::str::FromStr;

use serde_json::Value;

use crate::error::{Result, SourceError};
use crate::inner_hit::InnerHit;
use crate::sort::SortInfo;
use crate::source::{RawJson, Source};

/// A parsed inner hit definition.
#[derive(Debug, Clone)]
pub enum InnerHitSpec {
    Raw(RawJson),
    Built(InnerHit),
}

impl InnerHitSpec {
    /// Parse `text`. `default_size` fills in `size` for `key=value` specs
    /// that do not set one; raw JSON is never altered.
    pub fn parse(text: &str, default_size: Option<i64>) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.starts_with('{') {
            return Ok(Self::Raw(RawJson::new(trimmed)));
        }

        let mut hit = InnerHit::new();
        for pair in trimmed.split(',').filter(|p| !p.trim().is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| SourceError::invalid_spec(text, format!("expected key=value, got {pair:?}")))?;
            let (key, value) = (key.trim(), value.trim());
            hit = match key {
                "name" => hit.name(value),
                "from" => hit.from_offset(parse_int(text, key, value)?),
                "size" => hit.size(parse_int(text, key, value)?),
                "sort" => hit.sort(parse_sort(text, value)?),
                "explain" => hit.explain(parse_bool(text, key, value)?),
                "version" => hit.version(parse_bool(text, key, value)?),
                "track_scores" => hit.track_scores(parse_bool(text, key, value)?),
                "source" => hit.fetch_source(parse_bool(text, key, value)?),
                other => {
                    return Err(SourceError::invalid_spec(
                        text,
                        format!("unknown key {other:?}"),
                    ))
                }
            };
        }

        if hit.get_size().is_none() {
            if let Some(size) = default_size {
                hit = hit.size(size);
            }
        }
        Ok(Self::Built(hit))
    }
}

impl FromStr for InnerHitSpec {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

impl Source for InnerHitSpec {
    fn source(&self) -> Result<Value> {
        match self {
            Self::Raw(raw) => raw.source(),
            Self::Built(hit) => hit.source(),
        }
    }
}

fn parse_int(spec: &str, key: &str, value: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|_| SourceError::invalid_spec(spec, format!("{key} must be an integer, got {value:?}")))
}

fn parse_bool(spec: &str, key: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| SourceError::invalid_spec(spec, format!("{key} must be true or false, got {value:?}")))
}

fn parse_sort(spec: &str, value: &str) -> Result<SortInfo> {
    // Only a trailing `:asc` or `:desc` is an order; any other colon is part
    // of the field name.
    let (field, ascending) = match value.rsplit_once(':') {
        Some((field, "asc")) => (field, true),
        Some((field, "desc")) => (field, false),
        _ => (value, true),
    };
    if field.is_empty() {
        return Err(SourceError::invalid_spec(spec, "sort needs a field"));
    }
    Ok(SortInfo::new(field).order(ascending))
}
