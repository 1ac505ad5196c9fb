//! Markup fetcher: extracts headline anchors from a publisher's HTML.
//!
//! Each markup source carries a CSS selector list identifying the anchor
//! elements that represent headlines (e.g. `article h2 a, .title a`). The
//! anchor's visible text becomes the title and its `href` the story URL;
//! relative links are resolved against the source endpoint before storage.

use crate::models::{FetchFailure, NewsItem};
use crate::registry::{PER_SOURCE_CAP, Source};
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, instrument};
use url::Url;

/// Fetch up to [`PER_SOURCE_CAP`] headlines from a markup source.
///
/// Same contract as the feed fetcher: a typed [`FetchFailure`] on any
/// request, status, or extraction problem, absorbed by the coordinator.
#[instrument(level = "debug", skip_all, fields(source = source.name))]
pub async fn fetch_headlines(
    client: &Client,
    source: &Source,
) -> Result<Vec<NewsItem>, FetchFailure> {
    let selector = source
        .selector
        .ok_or_else(|| FetchFailure::Parse("markup source has no selector".to_string()))?;

    let response = client
        .get(source.endpoint)
        .send()
        .await
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchFailure::Transport(e.to_string()))?;

    let items = extract_headlines(&body, selector, source.endpoint, source.name)?;
    debug!(count = items.len(), "Extracted markup headlines");
    Ok(items)
}

/// Extract normalized headlines from an HTML document.
///
/// Pure function of its input: identical markup yields identical items.
/// Takes the first [`PER_SOURCE_CAP`] elements matched by the selector;
/// candidates whose text or link comes out empty are skipped.
pub fn extract_headlines(
    html: &str,
    selector_expr: &str,
    endpoint: &str,
    source_name: &str,
) -> Result<Vec<NewsItem>, FetchFailure> {
    let selector = Selector::parse(selector_expr)
        .map_err(|e| FetchFailure::Parse(format!("invalid selector {selector_expr:?}: {e}")))?;
    let base = Url::parse(endpoint)
        .map_err(|e| FetchFailure::Parse(format!("invalid base endpoint {endpoint:?}: {e}")))?;

    let document = Html::parse_document(html);
    let mut items = Vec::new();

    for element in document.select(&selector).take(PER_SOURCE_CAP) {
        let title = visible_text(&element);
        let Some(link) = element
            .value()
            .attr("href")
            .and_then(|href| resolve_link(&base, href))
        else {
            continue;
        };
        if title.is_empty() {
            continue;
        }

        items.push(NewsItem {
            title,
            url: link,
            source_name: source_name.to_string(),
        });
    }

    Ok(items)
}

/// Collapse an element's text nodes into a single whitespace-normalized line.
fn visible_text(element: &scraper::ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve an anchor's `href` to an absolute URL.
///
/// Absolute links pass through; relative ones are joined against the
/// source's base endpoint. Unresolvable or empty links yield `None` so the
/// candidate is dropped.
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok().map(|u| u.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_FIXTURE: &str = r#"<!DOCTYPE html>
<html><body>
  <article><h2><a href="/noticia/123">Titular con enlace relativo</a></h2></article>
  <article><h2><a href="https://otro.uy/nota/9">Titular  con   espacios
    repartidos</a></h2></article>
  <article><h2><a href="/noticia/456">Tercer titular</a></h2></article>
  <article><h2><a href="/noticia/789">Cuarto titular, fuera del tope</a></h2></article>
  <article><h2><a href="/noticia/999">Quinto titular</a></h2></article>
</body></html>"#;

    #[test]
    fn test_takes_first_three_of_five_anchors() {
        let items =
            extract_headlines(PAGE_FIXTURE, "article h2 a", "https://example.uy/", "Portal")
                .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].title, "Tercer titular");
    }

    #[test]
    fn test_resolves_relative_links_against_endpoint() {
        let items =
            extract_headlines(PAGE_FIXTURE, "article h2 a", "https://example.uy/", "Portal")
                .unwrap();
        assert_eq!(items[0].url, "https://example.uy/noticia/123");
    }

    #[test]
    fn test_keeps_absolute_links_untouched() {
        let items =
            extract_headlines(PAGE_FIXTURE, "article h2 a", "https://example.uy/", "Portal")
                .unwrap();
        assert_eq!(items[1].url, "https://otro.uy/nota/9");
    }

    #[test]
    fn test_normalizes_whitespace_in_titles() {
        let items =
            extract_headlines(PAGE_FIXTURE, "article h2 a", "https://example.uy/", "Portal")
                .unwrap();
        assert_eq!(items[1].title, "Titular con espacios repartidos");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first =
            extract_headlines(PAGE_FIXTURE, "article h2 a", "https://example.uy/", "Portal")
                .unwrap();
        let second =
            extract_headlines(PAGE_FIXTURE, "article h2 a", "https://example.uy/", "Portal")
                .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_skips_candidates_with_empty_title_or_link() {
        let html = r#"<html><body>
          <article><h2><a href="/vacia">   </a></h2></article>
          <article><h2><a>Sin href</a></h2></article>
          <article><h2><a href="/buena">Titular válido</a></h2></article>
        </body></html>"#;
        let items =
            extract_headlines(html, "article h2 a", "https://example.uy/", "Portal").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "https://example.uy/buena");
    }

    #[test]
    fn test_selector_list_matches_multiple_rules() {
        let html = r#"<html><body>
          <div class="nota-title"><a href="/a">Por clase</a></div>
          <article><h2><a href="/b">Por estructura</a></h2></article>
        </body></html>"#;
        let items = extract_headlines(
            html,
            "article h2 a, .nota-title a",
            "https://example.uy/",
            "Portal",
        )
        .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_invalid_selector_is_parse_failure() {
        let result = extract_headlines("<html></html>", "](", "https://example.uy/", "Portal");
        assert!(matches!(result, Err(FetchFailure::Parse(_))));
    }

    #[test]
    fn test_no_matches_yields_empty_list_not_error() {
        let items = extract_headlines(
            "<html><body><p>sin titulares</p></body></html>",
            "article h2 a",
            "https://example.uy/",
            "Portal",
        )
        .unwrap();
        assert!(items.is_empty());
    }
}
