//! Data models for aggregated headlines and per-source fetch outcomes.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: one normalized headline with its source attribution
//! - [`FetchFailure`]: typed classification of why a source contributed nothing
//! - [`SourceReport`] / [`SourceOutcome`]: per-source diagnostics for one run
//! - [`AggregationResult`]: the consolidated output of one aggregation run

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One discovered headline, normalized and attributed.
///
/// Invariant: `title` and `url` are non-empty and trimmed, and `url` is
/// absolute. Candidates that cannot satisfy this are dropped during
/// extraction rather than stored with placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// The headline text, trimmed of surrounding whitespace.
    pub title: String,
    /// Absolute URL of the story.
    pub url: String,
    /// Display name of the publisher, taken verbatim from the registry
    /// entry, never derived from parsed content.
    pub source_name: String,
}

/// Why a single source contributed zero items.
///
/// Classified at the fetch boundary so the coordinator can report a
/// structured outcome per source instead of a bare logged exception.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// DNS, connection, TLS, or timeout failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(String),
    /// The publisher answered with a non-success HTTP status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The response body could not be parsed as a feed or the selector
    /// could not be applied to the markup.
    #[error("parse failed: {0}")]
    Parse(String),
}

/// What one source produced during a run.
#[derive(Debug)]
pub enum SourceOutcome {
    /// The source was fetched and parsed; it contributed this many items
    /// (possibly zero, when every entry was malformed).
    Fetched(usize),
    /// The source failed and contributed nothing.
    Failed(FetchFailure),
}

/// Per-source diagnostic record for one aggregation run.
///
/// Reports are collected in registry order, independent of the item list,
/// so a caller can distinguish "source had no news" from "source was down".
#[derive(Debug)]
pub struct SourceReport {
    /// Registry display name of the source.
    pub source_name: &'static str,
    /// What the fetch produced.
    pub outcome: SourceOutcome,
}

impl SourceReport {
    /// Whether the source was fetched successfully (even with zero items).
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SourceOutcome::Fetched(_))
    }
}

/// The ordered output of one aggregation run.
///
/// Constructed and owned by the coordinator, returned to the caller by
/// value, then discarded. Never persisted between runs.
#[derive(Debug)]
pub struct AggregationResult {
    /// Consolidated headlines in registry order, capped at the run total.
    pub items: Vec<NewsItem>,
    /// One report per registry entry, in registry order.
    pub reports: Vec<SourceReport>,
}

impl AggregationResult {
    /// True when no source returned content. The caller must render this
    /// as "no news available", not as an error.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of sources that were fetched and parsed successfully.
    pub fn sources_succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_item_serialization_round_trip() {
        let item = NewsItem {
            title: "Titular de prueba".to_string(),
            url: "https://example.uy/noticia/123".to_string(),
            source_name: "El País".to_string(),
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: NewsItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_fetch_failure_display() {
        assert_eq!(
            FetchFailure::Status(503).to_string(),
            "unexpected HTTP status 503"
        );
        assert_eq!(
            FetchFailure::Transport("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert!(
            FetchFailure::Parse("bad xml".to_string())
                .to_string()
                .contains("bad xml")
        );
    }

    #[test]
    fn test_source_report_success_classification() {
        let ok = SourceReport {
            source_name: "La Diaria",
            outcome: SourceOutcome::Fetched(3),
        };
        let failed = SourceReport {
            source_name: "Subrayado",
            outcome: SourceOutcome::Failed(FetchFailure::Status(404)),
        };
        assert!(ok.is_success());
        assert!(!failed.is_success());
    }

    #[test]
    fn test_aggregation_result_counts() {
        let result = AggregationResult {
            items: vec![],
            reports: vec![
                SourceReport {
                    source_name: "El País",
                    outcome: SourceOutcome::Fetched(0),
                },
                SourceReport {
                    source_name: "República",
                    outcome: SourceOutcome::Failed(FetchFailure::Transport("timeout".into())),
                },
            ],
        };
        assert!(result.is_empty());
        assert_eq!(result.sources_succeeded(), 1);
    }
}
