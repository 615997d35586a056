//! # hn_reader
//!
//! A command-line reader for the Hacker News front page. Fetches the current
//! ranked top-story IDs, retrieves each retained item in order, and prints
//! the posts as an indented JSON array on stdout.
//!
//! ## Usage
//!
//! ```sh
//! hn_reader --posts 20
//! ```
//!
//! Diagnostics go to an append-only `hn_reader.log` in the working directory;
//! stdout carries nothing but the JSON document. Exit codes: 0 on success,
//! 2 on a usage error (bad `--posts`), 1 on any fetch or decode failure.

use clap::Parser;
use std::error::Error;
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use hn_reader::api::{ApiClient, REQUEST_TIMEOUT};
use hn_reader::cli::Cli;
use hn_reader::outputs::json;
use hn_reader::posts::{fetch_top_posts, Endpoints};

const LOG_FILE: &str = "hn_reader.log";

#[tokio::main]
async fn main() -> ExitCode {
    // Usage errors exit here (code 2), before logging or any network access.
    let args = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("warning: could not open {LOG_FILE} for logging: {e}");
    }

    let start_time = std::time::Instant::now();
    info!(posts = args.posts, "hn_reader starting up");

    match run(&args).await {
        Ok(()) => {
            let elapsed = start_time.elapsed();
            info!(?elapsed, "Execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error retrieving top posts from Hacker News: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Fetch, assemble, and print. Nothing reaches stdout unless the whole
/// pipeline succeeded.
async fn run(args: &Cli) -> Result<(), Box<dyn Error>> {
    let client = ApiClient::new(REQUEST_TIMEOUT)?;
    let endpoints = Endpoints::default();

    let posts = fetch_top_posts(&client, &endpoints, args.posts as usize).await?;
    let rendered = json::render(&posts)?;
    println!("{rendered}");

    Ok(())
}

/// Send tracing output to an append-only log file, keeping stdout clean for
/// the JSON document. Filter defaults to `debug`, overridable via `RUST_LOG`.
fn init_logging() -> Result<(), Box<dyn Error>> {
    let log_file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
    Ok(())
}
