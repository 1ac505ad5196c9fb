//! Output rendering for one aggregation run.
//!
//! - [`digest`]: the user-facing Markdown digest (what subscribers read)
//! - [`json`]: machine-readable JSON file of the item list

pub mod digest;
pub mod json;
