//! Shared HTTP client construction.
//!
//! One client is built per aggregation run and reused across every request
//! that run issues, so connections to a publisher are pooled. Clients carry
//! a bounded per-request timeout and a default `User-Agent`. Status codes
//! and transport errors are interpreted by the fetchers; no retry or
//! circuit-breaking happens at this layer.

use reqwest::Client;
use std::time::Duration;

/// Per-request timeout. One slow publisher may burn this entire budget
/// without delaying its siblings, since fetches run concurrently.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Browser identification sent to markup sources. Some publishers reject
/// requests without a recognizable browser `User-Agent`.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Client used for feed endpoints. Identifies itself honestly; feed
/// endpoints are built for machine consumption.
pub fn feed_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("noticias_uy/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Client used for markup endpoints, with a browser-like `User-Agent`.
pub fn markup_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(BROWSER_USER_AGENT)
        .build()
}
