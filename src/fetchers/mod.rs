//! Per-source headline fetchers.
//!
//! One submodule per acquisition strategy:
//!
//! - [`feed`]: structured RSS/Atom parsing from raw response bytes
//! - [`markup`]: CSS-selector extraction from HTML pages
//!
//! Both expose the same shape, `fetch_headlines(&Client, &Source)`, returning
//! at most [`crate::registry::PER_SOURCE_CAP`] normalized items or a typed
//! [`crate::models::FetchFailure`]. The coordinator absorbs failures; a
//! failed source contributes an empty list, never an aborted run.

pub mod feed;
pub mod markup;
