//! Feed fetcher: retrieves and parses an RSS/Atom feed for one source.
//!
//! The response body is read as raw bytes and handed to `feed-rs`, which
//! performs its own character-encoding detection from the byte stream and
//! the XML encoding declaration. Uruguayan publishers disagree between
//! declared and actual encodings often enough that decoding the body as
//! text before parsing corrupts accented characters.

use crate::models::{FetchFailure, NewsItem};
use crate::registry::{PER_SOURCE_CAP, Source};
use feed_rs::model::Entry;
use feed_rs::parser;
use reqwest::Client;
use tracing::{debug, instrument};

/// Fetch up to [`PER_SOURCE_CAP`] headlines from a feed source.
///
/// Returns a typed [`FetchFailure`] instead of items when the request,
/// status, or parse fails; the coordinator converts that into an empty
/// contribution so the failure never crosses the aggregation boundary.
#[instrument(level = "debug", skip_all, fields(source = source.name))]
pub async fn fetch_headlines(
    client: &Client,
    source: &Source,
) -> Result<Vec<NewsItem>, FetchFailure> {
    let response = client
        .get(source.endpoint)
        .send()
        .await
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status.as_u16()));
    }

    // Raw bytes, not text: the parser owns encoding detection.
    let body = response
        .bytes()
        .await
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;

    let items = parse_headlines(&body, source.name)?;
    debug!(count = items.len(), "Parsed feed headlines");
    Ok(items)
}

/// Parse feed bytes into normalized headlines attributed to `source_name`.
///
/// Takes the first `min(PER_SOURCE_CAP, available)` entries; entries
/// missing a title or a usable link are skipped individually rather than
/// failing the whole document.
pub fn parse_headlines(bytes: &[u8], source_name: &str) -> Result<Vec<NewsItem>, FetchFailure> {
    let feed = parser::parse(bytes).map_err(|e| FetchFailure::Parse(e.to_string()))?;

    let mut items = Vec::new();
    for entry in feed.entries.into_iter().take(PER_SOURCE_CAP) {
        let Some(title) = entry
            .title
            .as_ref()
            .map(|t| t.content.trim().to_string())
            .filter(|t| !t.is_empty())
        else {
            continue;
        };
        let Some(link) = entry_link(&entry) else {
            continue;
        };

        items.push(NewsItem {
            title,
            url: link,
            source_name: source_name.to_string(),
        });
    }

    Ok(items)
}

/// Pick the story link for a feed entry: the alternate (or unqualified)
/// link when present, otherwise any non-empty link.
fn entry_link(entry: &Entry) -> Option<String> {
    let alternate = entry.links.iter().find(|l| {
        let rel = l.rel.as_deref().unwrap_or("");
        !l.href.trim().is_empty() && (rel.is_empty() || rel.eq_ignore_ascii_case("alternate"))
    });
    alternate
        .or_else(|| entry.links.iter().find(|l| !l.href.trim().is_empty()))
        .map(|l| l.href.trim().to_string())
}
