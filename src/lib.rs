//! # hn_reader
//!
//! Fetches the current top posts from the Hacker News API and prints a
//! fixed-size ranked list as indented JSON on standard output.
//!
//! The pipeline is deliberately sequential: one request for the ranked ID
//! list, then one request per retained item, in rank order. Any fetch or
//! decode failure aborts the whole run; nothing is printed on failure.

pub mod api;
pub mod cli;
pub mod models;
pub mod outputs;
pub mod posts;
pub mod utils;
