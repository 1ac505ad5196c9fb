//! Fetch coordinator: concurrent fan-out across the source registry.
//!
//! One fetch task is dispatched per registry entry, routed to the feed or
//! markup fetcher by strategy. All tasks run concurrently (the dominant
//! cost is per-source network latency) and results are collected
//! positionally, so the merged output follows registry order regardless of
//! completion order. A failing source contributes an empty list and a
//! `Failed` report; it never cancels or delays its siblings.

use crate::fetchers::{feed, markup};
use crate::models::{AggregationResult, NewsItem, SourceOutcome, SourceReport};
use crate::registry::{self, Source, Strategy, TOTAL_CAP};
use futures::future;
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Run one aggregation over the configured registry.
///
/// Never fails on account of any source: the worst case is an empty item
/// list, which callers must render as "no news available". The only error
/// this returns is failure to construct the HTTP clients themselves,
/// before any fetch is dispatched; that is left to the caller's boundary.
#[instrument(level = "info", skip_all)]
pub async fn aggregate() -> Result<AggregationResult, reqwest::Error> {
    let feed_client = crate::transport::feed_client()?;
    let markup_client = crate::transport::markup_client()?;
    Ok(aggregate_sources(&feed_client, &markup_client, registry::sources()).await)
}

/// Fan out over an explicit source list and consolidate the results.
///
/// Dispatch order follows `sources` order; `join_all` places task *i*'s
/// result at position *i*, which fixes the merge order independently of
/// completion order.
pub async fn aggregate_sources(
    feed_client: &Client,
    markup_client: &Client,
    sources: &[Source],
) -> AggregationResult {
    let tasks = sources.iter().map(|source| async move {
        let fetched = match source.strategy {
            Strategy::Feed => feed::fetch_headlines(feed_client, source).await,
            Strategy::Markup => markup::fetch_headlines(markup_client, source).await,
        };
        match fetched {
            Ok(items) => {
                let report = SourceReport {
                    source_name: source.name,
                    outcome: SourceOutcome::Fetched(items.len()),
                };
                (items, report)
            }
            Err(failure) => {
                warn!(source = source.name, error = %failure, "Source fetch failed");
                let report = SourceReport {
                    source_name: source.name,
                    outcome: SourceOutcome::Failed(failure),
                };
                (Vec::new(), report)
            }
        }
    });

    let per_source = future::join_all(tasks).await;
    let result = consolidate(per_source);
    info!(
        items = result.items.len(),
        sources = result.reports.len(),
        succeeded = result.sources_succeeded(),
        "Aggregation run complete"
    );
    result
}

/// Merge per-source results in their given order and truncate to the run cap.
fn consolidate(per_source: Vec<(Vec<NewsItem>, SourceReport)>) -> AggregationResult {
    let mut items = Vec::new();
    let mut reports = Vec::with_capacity(per_source.len());
    for (list, report) in per_source {
        items.extend(list);
        reports.push(report);
    }

    if items.is_empty() {
        // Per-source failures were already logged; this flags the run-level
        // "no content available" outcome.
        warn!("No sources returned content");
    }
    items.truncate(TOTAL_CAP);

    AggregationResult { items, reports }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FetchFailure;

    fn item(n: usize, source_name: &str) -> NewsItem {
        NewsItem {
            title: format!("Titular {n}"),
            url: format!("https://example.uy/noticia/{n}"),
            source_name: source_name.to_string(),
        }
    }

    fn fetched(source_name: &'static str, items: Vec<NewsItem>) -> (Vec<NewsItem>, SourceReport) {
        let report = SourceReport {
            source_name,
            outcome: SourceOutcome::Fetched(items.len()),
        };
        (items, report)
    }

    fn failed(source_name: &'static str) -> (Vec<NewsItem>, SourceReport) {
        let report = SourceReport {
            source_name,
            outcome: SourceOutcome::Failed(FetchFailure::Transport("connection refused".into())),
        };
        (Vec::new(), report)
    }

    #[test]
    fn test_truncates_fifteen_items_to_ten_preserving_order() {
        let per_source = vec![
            fetched("A", (0..5).map(|n| item(n, "A")).collect()),
            fetched("B", (5..10).map(|n| item(n, "B")).collect()),
            fetched("C", (10..15).map(|n| item(n, "C")).collect()),
        ];
        let result = consolidate(per_source);
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.items[0].title, "Titular 0");
        assert_eq!(result.items[9].title, "Titular 9");
    }

    #[test]
    fn test_single_surviving_source_carries_the_run() {
        let per_source = vec![
            failed("A"),
            failed("B"),
            fetched("C", (0..3).map(|n| item(n, "C")).collect()),
            failed("D"),
            failed("E"),
        ];
        let result = consolidate(per_source);
        assert_eq!(result.items.len(), 3);
        assert!(result.items.iter().all(|i| i.source_name == "C"));
        assert_eq!(result.sources_succeeded(), 1);
        assert_eq!(result.reports.len(), 5);
    }

    #[test]
    fn test_all_sources_failing_yields_empty_result() {
        let result = consolidate(vec![failed("A"), failed("B")]);
        assert!(result.is_empty());
        assert_eq!(result.sources_succeeded(), 0);
    }

    #[test]
    fn test_merge_follows_source_order_not_contribution_size() {
        let per_source = vec![
            fetched("A", vec![item(1, "A")]),
            fetched("B", (2..5).map(|n| item(n, "B")).collect()),
            fetched("C", vec![item(5, "C")]),
        ];
        let result = consolidate(per_source);
        let order: Vec<&str> = result
            .items
            .iter()
            .map(|i| i.source_name.as_str())
            .collect();
        assert_eq!(order, vec!["A", "B", "B", "B", "C"]);
    }

    #[tokio::test]
    async fn test_unreachable_sources_produce_empty_result_not_error() {
        // Nothing listens on these endpoints; every fetch must fail fast
        // and be absorbed into a Failed report.
        let sources = [
            Source {
                name: "Feed caído",
                endpoint: "http://127.0.0.1:1/rss",
                strategy: Strategy::Feed,
                selector: None,
            },
            Source {
                name: "Portal caído",
                endpoint: "http://127.0.0.1:1/",
                strategy: Strategy::Markup,
                selector: Some("article h2 a"),
            },
        ];
        let feed_client = crate::transport::feed_client().unwrap();
        let markup_client = crate::transport::markup_client().unwrap();

        let result = aggregate_sources(&feed_client, &markup_client, &sources).await;
        assert!(result.is_empty());
        assert_eq!(result.reports.len(), 2);
        assert!(
            result
                .reports
                .iter()
                .all(|r| matches!(r.outcome, SourceOutcome::Failed(_)))
        );
    }
}
