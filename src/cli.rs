//! Command-line interface definitions.
//!
//! The binary is the "front end" around the aggregation engine: `fetch`
//! runs one aggregation (this is what a cron entry at the two daily send
//! times invokes), and the subscriber subcommands manage the file-backed
//! recipient list.

use clap::{Parser, Subcommand};

/// Command-line arguments for the Uruguayan news aggregator.
///
/// # Examples
///
/// ```sh
/// # Print the current top-10 digest
/// noticias_uy fetch
///
/// # Also write the item list as JSON
/// noticias_uy fetch --json-output ./noticias.json
///
/// # Manage the subscriber list
/// noticias_uy subscribe 123456789
/// noticias_uy unsubscribe 123456789
/// noticias_uy subscribers
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the subscriber list file
    #[arg(long, default_value = "suscriptores.json", global = true)]
    pub subscribers_file: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the aggregated top headlines and print the digest
    Fetch {
        /// Optional path to also write the item list as JSON
        #[arg(short, long)]
        json_output: Option<String>,
    },
    /// Subscribe a chat id to the scheduled digest
    Subscribe {
        /// Chat id to add
        chat_id: i64,
    },
    /// Unsubscribe a chat id from the scheduled digest
    Unsubscribe {
        /// Chat id to remove
        chat_id: i64,
    },
    /// List subscribed chat ids
    Subscribers,
}
