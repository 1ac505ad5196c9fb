//! # Noticias UY
//!
//! Aggregates the top headlines from a fixed set of Uruguayan news portals
//! and prints them as a ready-to-send Markdown digest.
//!
//! ## Features
//!
//! - Two acquisition strategies per source: RSS/Atom feed parsing and
//!   CSS-selector HTML scraping
//! - Concurrent fan-out across all sources; one failing portal never
//!   empties the run
//! - Deterministic merge order (registry order) capped at 10 headlines
//! - File-backed subscriber list for the scheduled digest
//!
//! ## Usage
//!
//! ```sh
//! noticias_uy fetch
//! ```
//!
//! Scheduling is external: a cron entry invokes `fetch` at the two daily
//! send times; the aggregator itself has no clock awareness.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregator;
mod cli;
mod fetchers;
mod models;
mod outputs;
mod registry;
mod subscribers;
mod transport;

use cli::{Cli, Command};
use subscribers::SubscriberStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Fetch { json_output } => fetch(json_output.as_deref()).await,
        Command::Subscribe { chat_id } => {
            let store = SubscriberStore::new(&args.subscribers_file);
            if store.add(chat_id).await? {
                println!("✅ Suscripto. Vas a recibir las noticias a las 8:00 y 20:00.");
            } else {
                println!("ℹ️ Ese chat ya estaba suscripto.");
            }
            Ok(())
        }
        Command::Unsubscribe { chat_id } => {
            let store = SubscriberStore::new(&args.subscribers_file);
            if store.remove(chat_id).await? {
                println!("❌ Desuscripto. No vas a recibir más noticias automáticas.");
            } else {
                println!("ℹ️ Ese chat no estaba suscripto.");
            }
            Ok(())
        }
        Command::Subscribers => {
            let store = SubscriberStore::new(&args.subscribers_file);
            for chat_id in store.load().await {
                println!("{chat_id}");
            }
            Ok(())
        }
    }
}

/// Run one aggregation, print the digest, and optionally write JSON output.
async fn fetch(json_output: Option<&str>) -> Result<(), Box<dyn Error>> {
    let start_time = std::time::Instant::now();
    info!("Starting aggregation run");

    let result = aggregator::aggregate().await?;

    println!("{}", outputs::digest::render(&result));

    if let Some(path) = json_output {
        if let Err(e) = outputs::json::write_items(&result, path).await {
            error!(path, error = %e, "Failed to write JSON output");
            return Err(e);
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        items = result.items.len(),
        sources_succeeded = result.sources_succeeded(),
        sources_total = result.reports.len(),
        "Execution complete"
    );
    Ok(())
}
