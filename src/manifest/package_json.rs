//! package.json patcher
//!
//! Rewrites the version strings of existing entries in `dependencies`
//! and `devDependencies`. Entries are never added or removed; new
//! versions are always written as a caret range (`^x.y.z`). When no
//! record matches the manifest the file is left byte-for-byte
//! untouched so repeated runs produce no spurious diffs.

use crate::domain::{UpdateAction, UpdateRecord};
use crate::error::ManifestError;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Platform-specific native build variants that npm resolves on its
/// own; "add" records for these are skipped without comment
const PLATFORM_PACKAGE_MARKERS: [&str; 2] = ["@rollup/rollup-", "@esbuild/"];

/// Which manifest section an update landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
}

impl DependencySection {
    /// JSON key of the section
    pub fn key(&self) -> &'static str {
        match self {
            DependencySection::Dependencies => "dependencies",
            DependencySection::DevDependencies => "devDependencies",
        }
    }
}

/// A version range rewrite that was applied to the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedUpdate {
    /// Package whose entry was rewritten
    pub package: String,
    /// Section the entry was found in
    pub section: DependencySection,
    /// Previous version range string
    pub old_range: String,
    /// New caret range written in its place
    pub new_range: String,
}

/// Outcome of patching a manifest
#[derive(Debug, Clone, Default)]
pub struct PatchResult {
    /// Re-serialized manifest text, None when nothing changed
    pub content: Option<String>,
    /// Rewrites that were applied
    pub applied: Vec<AppliedUpdate>,
    /// Platform-specific "add" packages that were skipped
    pub skipped_platform: Vec<String>,
    /// "add" packages that may appear as indirect dependencies
    pub indirect: Vec<String>,
}

impl PatchResult {
    /// Whether any record modified the manifest
    pub fn modified(&self) -> bool {
        self.content.is_some()
    }
}

/// Apply update records to manifest text
///
/// Each record is applied to at most one section, `dependencies`
/// first. Records whose package is absent from both sections change
/// nothing; "add" records among them are classified as platform
/// variants or possible indirect dependencies for reporting.
pub fn patch_manifest(
    content: &str,
    records: &[UpdateRecord],
) -> Result<PatchResult, serde_json::Error> {
    let mut json: Value = serde_json::from_str(content)?;
    let mut result = PatchResult::default();

    for record in records {
        let applied = bump_version(&mut json, DependencySection::Dependencies, record)
            .or_else(|| bump_version(&mut json, DependencySection::DevDependencies, record));

        if let Some(applied) = applied {
            result.applied.push(applied);
        } else if record.action == UpdateAction::Add {
            if PLATFORM_PACKAGE_MARKERS
                .iter()
                .any(|m| record.package.contains(m))
            {
                result.skipped_platform.push(record.package.clone());
            } else {
                result.indirect.push(record.package.clone());
            }
        }
    }

    if !result.applied.is_empty() {
        let mut serialized = serde_json::to_string_pretty(&json)?;
        serialized.push('\n');
        result.content = Some(serialized);
    }

    Ok(result)
}

/// Rewrite the record's entry in one section, if present
fn bump_version(
    json: &mut Value,
    section: DependencySection,
    record: &UpdateRecord,
) -> Option<AppliedUpdate> {
    let deps = json.get_mut(section.key())?.as_object_mut()?;
    let entry = deps.get_mut(&record.package)?;

    let old_range = match entry.as_str() {
        Some(s) => s.to_string(),
        None => entry.to_string(),
    };
    let new_range = format!("^{}", record.new_version);
    *entry = Value::String(new_range.clone());

    Some(AppliedUpdate {
        package: record.package.clone(),
        section,
        old_range,
        new_range,
    })
}

/// Read, patch, and conditionally rewrite a package.json file
///
/// The file is only written when at least one record modified it.
/// Read, parse, and write failures all surface with the manifest path
/// attached; they abort the run.
pub fn apply_to_file(path: &Path, records: &[UpdateRecord]) -> Result<PatchResult, ManifestError> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;

    let result = patch_manifest(&content, records)
        .map_err(|e| ManifestError::parse_error(path, e.to_string()))?;

    if let Some(content) = &result.content {
        fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))?;
    }

    Ok(result)
}
