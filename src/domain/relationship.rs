//! Dependency relationship entries from the report's analysis section

use std::collections::HashMap;

/// Map from package name to its relationship analysis
pub type RelationshipMap = HashMap<String, RelationshipEntry>;

/// How a package relates to the rest of the dependency tree
///
/// Built once per report by the relationship extractor and read-only
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipEntry {
    /// Whether the scanner marked the package as a direct update target
    pub direct_update: bool,
    /// Parent packages through which the update would arrive, in order
    /// of first appearance, without duplicates
    pub dependent_chains: Vec<String>,
}

impl RelationshipEntry {
    /// Create an entry with no chains yet
    pub fn new(direct_update: bool) -> Self {
        Self {
            direct_update,
            dependent_chains: Vec::new(),
        }
    }

    /// Create an entry for a direct update target
    pub fn direct() -> Self {
        Self::new(true)
    }

    /// Append a parent package, keeping first-appearance order and
    /// skipping duplicates
    pub fn push_chain(&mut self, parent: impl Into<String>) {
        let parent = parent.into();
        if !self.dependent_chains.contains(&parent) {
            self.dependent_chains.push(parent);
        }
    }
}
