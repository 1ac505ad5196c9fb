//! Markdown digest rendering.
//!
//! Produces the message the front end delivers to readers: a numbered list
//! of headlines with source attribution and link, plus an update timestamp.
//! An empty run renders an informational "no news available" message, never
//! an error.

use crate::models::AggregationResult;
use chrono::Local;

/// Shown when no source returned content.
pub const EMPTY_MESSAGE: &str =
    "ℹ️ No hay noticias disponibles en este momento. Intentá de nuevo más tarde.";

/// Render the digest for one aggregation run, stamped with the current
/// local time.
pub fn render(result: &AggregationResult) -> String {
    render_at(result, &Local::now().format("%d/%m/%Y %H:%M").to_string())
}

/// Render with an explicit timestamp string. Split out so formatting is
/// testable without depending on the wall clock.
pub fn render_at(result: &AggregationResult, timestamp: &str) -> String {
    if result.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut out = String::from("📰 *TOP NOTICIAS DE URUGUAY*\n\n");
    for (i, item) in result.items.iter().enumerate() {
        out.push_str(&format!("*{}. {}*\n", i + 1, item.title));
        out.push_str(&format!("    📌 {}\n", item.source_name));
        out.push_str(&format!("    🔗 {}\n\n", item.url));
    }
    out.push_str(&format!("_Actualizado: {timestamp}_"));
    out
}
