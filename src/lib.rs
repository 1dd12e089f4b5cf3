//! qfrag: render search-request fragments.
//!
//! The builders live in [`qfrag_core`] and are re-exported here so that
//! integration tests and callers of the binary's logic can import one crate.
//!
//! # Architecture
//!
//! ```text
//! cli args ──► InnerHitSpec ──► CollapseBuilder ──► Source ──► JSON text
//!                                   ▲
//!                  Config defaults ─┘
//! ```

pub mod cli;

pub use qfrag_core::config::Config;
pub use qfrag_core::*;
