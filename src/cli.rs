//! Command-line interface definitions for hn_reader.
//!
//! This module defines the CLI arguments using the `clap` crate. The range
//! check on `--posts` runs during parsing, so invalid values are rejected
//! with a usage error before any logging or network activity.

use clap::Parser;

/// Command-line arguments for hn_reader.
///
/// # Examples
///
/// ```sh
/// hn_reader --posts 20
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about = "Read the Hacker News top posts in JSON.")]
pub struct Cli {
    /// How many posts to print. A positive integer <= 100.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub posts: u32,
}
