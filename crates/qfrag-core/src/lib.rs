//! qfrag-core: builders for search-request JSON fragments.
//!
//! Every builder renders through the [`Source`] capability. Builders that
//! embed children accept any `Source`, so hand-written JSON, third-party
//! types and the builders in this crate mix freely.
//!
//! ```text
//! CollapseBuilder ──► InnerHit ──► SortInfo / ScoreSort
//!                        │    └──► FetchSourceContext
//!                        └──► CollapseBuilder (second level)
//! ```
//!
//! ```rust
//! use qfrag_core::{CollapseBuilder, InnerHit, SortInfo, Source};
//!
//! let collapse = CollapseBuilder::new("user")
//!     .inner_hit(InnerHit::new().name("last_tweets").size(5).sort(SortInfo::new("date")))
//!     .max_concurrent_group_searches(4);
//! let src = collapse.source().unwrap();
//! assert_eq!(src["inner_hits"]["name"], "last_tweets");
//! ```

pub mod collapse;
pub mod config;
pub mod error;
pub mod fetch_source;
pub mod inner_hit;
pub mod sort;
pub mod source;
pub mod spec;

pub use collapse::CollapseBuilder;
pub use error::{Result, SourceError};
pub use fetch_source::FetchSourceContext;
pub use inner_hit::InnerHit;
pub use sort::{ScoreSort, SortInfo};
pub use source::{RawJson, RawSource, Source};
pub use spec::InnerHitSpec;
