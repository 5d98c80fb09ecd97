//! Dependency update records extracted from a scan report

use serde::Serialize;

/// What the scanner recommends doing with a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateAction {
    /// Bump an existing dependency to a new version
    Update,
    /// A package newly introduced by the scan
    Add,
}

impl UpdateAction {
    /// Lowercase label as it appears in the report
    pub fn label(&self) -> &'static str {
        match self {
            UpdateAction::Update => "updated",
            UpdateAction::Add => "added",
        }
    }
}

/// A single dependency change recommended by the scanner
///
/// Records are created by the report parser and never mutated
/// afterwards. Identity is the package name; when a report mentions the
/// same package twice, records are kept in order and the last one wins
/// at patch time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRecord {
    /// Package name as printed in the report (npm scope included)
    pub package: String,
    /// Recommended action
    pub action: UpdateAction,
    /// Previous version, present only for updates
    pub old_version: Option<String>,
    /// Version to move to
    pub new_version: String,
}

impl UpdateRecord {
    /// Create an update record for an existing dependency
    pub fn update(
        package: impl Into<String>,
        old_version: impl Into<String>,
        new_version: impl Into<String>,
    ) -> Self {
        Self {
            package: package.into(),
            action: UpdateAction::Update,
            old_version: Some(old_version.into()),
            new_version: new_version.into(),
        }
    }

    /// Create a record for a newly added package
    pub fn add(package: impl Into<String>, new_version: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            action: UpdateAction::Add,
            old_version: None,
            new_version: new_version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_constructor() {
        let record = UpdateRecord::update("lodash", "4.17.20", "4.17.21");
        assert_eq!(record.package, "lodash");
        assert_eq!(record.action, UpdateAction::Update);
        assert_eq!(record.old_version.as_deref(), Some("4.17.20"));
        assert_eq!(record.new_version, "4.17.21");
    }

    #[test]
    fn test_add_constructor() {
        let record = UpdateRecord::add("@types/node", "20.11.5");
        assert_eq!(record.action, UpdateAction::Add);
        assert!(record.old_version.is_none());
        assert_eq!(record.new_version, "20.11.5");
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(UpdateAction::Update.label(), "updated");
        assert_eq!(UpdateAction::Add.label(), "added");
    }
}
