//! Parser for the scanner's dependency change table
//!
//! Extracts update records from the "Dependency Changes Introduced"
//! section and collects security advisory lines (CVE mentions) seen
//! along the way.

use crate::domain::UpdateRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Header opening the dependency changes section
const SECTION_HEADER: &str = "## Dependency Changes Introduced";

/// Marker for the applied-security-updates summary line
const SECURITY_MARKER: &str = "Security Updates Applied:";

// Table rows carry an optional status icon column followed by package,
// action and version columns separated by box-drawing pipes. The
// icon-aware pattern is tried first; some rows (wrapped or re-rendered)
// lose their leading pipe, hence the plain fallback.
static ICON_UPDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"│\s+(?:⚠️ Flagged|✅ Safe)?\s*│?\s*([^│]+?)\s+│\s+updated\s+│\s+([^→]+)\s+→\s+([^\s│]+)")
        .unwrap()
});
static PLAIN_UPDATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^│]+?)\s+│\s+updated\s+│\s+([^→]+)\s+→\s+([^\s│]+)").unwrap());
static ADD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"│\s+(?:⚠️ Flagged|✅ Safe)?\s*│?\s*([^│]+?)\s+│\s+added\s+│\s+([^\s│]+)").unwrap()
});

/// Structured result of a report parse
///
/// Records keep their report order. Duplicate package names are kept;
/// the patcher applies them in order so the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Dependency changes found in the report
    pub updates: Vec<UpdateRecord>,
    /// Free-text advisory lines (CVE mentions, applied-fixes marker)
    pub security_fixes: Vec<String>,
}

impl ScanReport {
    /// Whether the report contained any dependency changes
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Parse the scanner's raw report text into update records
///
/// Tolerant by design: lines inside the dependency section that match
/// none of the known row formats are skipped silently. A report with no
/// dependency section at all yields an empty record list, which is a
/// valid terminal condition.
pub fn parse_report(input: &str) -> ScanReport {
    let mut report = ScanReport::default();
    let mut in_section = false;

    for line in input.lines() {
        if line.contains(SECTION_HEADER) {
            in_section = true;
            continue;
        }

        // An unrelated section header ends the scan entirely
        if in_section && line.starts_with("##") && !line.contains("Dependency") {
            break;
        }

        if in_section {
            if let Some(record) = parse_row(line) {
                report.updates.push(record);
            }
        }

        if line.contains("CVE-") || line.contains(SECURITY_MARKER) {
            report.security_fixes.push(line.trim().to_string());
        }
    }

    report
}

/// Try the row patterns in fixed priority order; at most one record
/// per line
fn parse_row(line: &str) -> Option<UpdateRecord> {
    let update_caps = ICON_UPDATE_RE
        .captures(line)
        .or_else(|| PLAIN_UPDATE_RE.captures(line));

    if let Some(caps) = update_caps {
        return Some(UpdateRecord::update(
            caps[1].trim(),
            caps[2].trim(),
            caps[3].trim(),
        ));
    }

    if let Some(caps) = ADD_RE.captures(line) {
        return Some(UpdateRecord::add(caps[1].trim(), caps[2].trim()));
    }

    None
}
