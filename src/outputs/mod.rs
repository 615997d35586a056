//! Output rendering for the ranked post list.
//!
//! # Submodules
//!
//! - [`json`]: renders the ordered records as indented JSON for stdout

pub mod json;
