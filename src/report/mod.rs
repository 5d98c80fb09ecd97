//! Scan report text extraction
//!
//! The scanner emits a human-readable report with box-drawing tables
//! and markdown-style headers. Both passes here are best-effort text
//! scrapers: anything that does not match is skipped, never fatal, so
//! format drift in the scanner degrades gracefully instead of aborting
//! a run.

mod parser;
mod relationships;

pub use parser::{parse_report, ScanReport};
pub use relationships::parse_relationships;
