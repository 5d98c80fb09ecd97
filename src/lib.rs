//! scanup - apply dependency updates from security scan reports
//!
//! This library provides the core pipeline for turning a scanner's
//! free-form report text into package.json changes:
//! - Report parsing (update records + security advisories)
//! - Dependency relationship extraction
//! - Direct vs transitive update filtering
//! - Manifest patching and npm install triggering

pub mod cli;
pub mod domain;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod update;
