//! Extractor for the report's dependency relationship analysis
//!
//! The scanner follows the change table with per-package sub-sections
//! explaining how an affected package is reachable:
//!
//! ```text
//! ### minimist (updated through parents)
//! 1. mkdirp@0.5.1 → minimist@1.2.5
//! 2. optimist@0.6.1 → minimist@0.0.10
//! ```
//!
//! An arrow glyph in the sub-header (`### lodash (→ 4.17.21 available)`)
//! marks the package as a direct update target. Numbered lines name the
//! parent package a transitive update would flow through.

use crate::domain::{RelationshipEntry, RelationshipMap};
use regex::Regex;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+(.+?)\s+\(").unwrap());
static CHAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+?)→").unwrap());

/// Parse the relationship analysis sections of the raw report text
///
/// Returns a map from package name to its relationship entry. Chains
/// preserve order of first appearance without duplicates. Like the
/// table parser this is tolerant: lines that match neither pattern are
/// ignored.
pub fn parse_relationships(input: &str) -> RelationshipMap {
    let mut relationships = RelationshipMap::new();
    let mut current_package: Option<String> = None;

    for line in input.lines() {
        // Sub-header opening a package's analysis; an arrow in the
        // header marks the package as a direct update target, its
        // absence means the update arrives through the chains below
        if line.starts_with("### ") && line.contains('(') {
            if let Some(caps) = HEADER_RE.captures(line) {
                let package = caps[1].trim().to_string();
                let entry = RelationshipEntry::new(line.contains('→'));
                relationships.insert(package.clone(), entry);
                current_package = Some(package);
            }
            continue;
        }

        let Some(package) = &current_package else {
            continue;
        };

        if !line.contains('→') {
            continue;
        }

        if let Some(caps) = CHAIN_RE.captures(line) {
            // Version suffix after '@' is dropped from the parent name
            let parent = caps[2].trim();
            let parent = parent.split('@').next().unwrap_or(parent);
            if let Some(entry) = relationships.get_mut(package) {
                entry.push_chain(parent);
            }
        }
    }

    relationships
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let map = parse_relationships("");
        assert!(map.is_empty());
    }

    #[test]
    fn test_no_relationship_sections() {
        let input = "## Dependency Changes Introduced\n│ lodash │ updated │ 1 → 2 │\n";
        let map = parse_relationships(input);
        assert!(map.is_empty());
    }

    #[test]
    fn test_header_without_arrow_is_not_direct() {
        let input = "### lodash (seen in lockfile)\n1. chalk@4.0.0 → lodash@4.17.20\n";
        let map = parse_relationships(input);
        let entry = map.get("lodash").unwrap();
        assert!(!entry.direct_update);
        assert_eq!(entry.dependent_chains, vec!["chalk"]);
    }

    #[test]
    fn test_header_without_parenthesis_ignored() {
        let input = "### lodash → 4.17.21\n1. chalk@4.0.0 → lodash@4.17.20\n";
        let map = parse_relationships(input);
        assert!(map.is_empty());
    }

    #[test]
    fn test_arrow_header_marks_direct_target() {
        // A package can carry dependent chains and still be a direct
        // update target when its header has the arrow
        let input = "\
### lodash (→ 4.17.21 available)
1. cli-table@0.3.1 → lodash@4.17.20

### minimist (updated through parents)
1. mkdirp@0.5.1 → minimist@1.2.5
";
        let map = parse_relationships(input);
        assert!(map.get("lodash").unwrap().direct_update);
        assert!(!map.get("minimist").unwrap().direct_update);
        assert_eq!(
            map.get("minimist").unwrap().dependent_chains,
            vec!["mkdirp"]
        );
    }

    #[test]
    fn test_single_package_with_chains() {
        let input = "\
### minimist (→ 1.2.8 available)
1. mkdirp@0.5.1 → minimist@1.2.5
2. optimist@0.6.1 → minimist@0.0.10
";
        let map = parse_relationships(input);
        let entry = map.get("minimist").unwrap();
        assert!(entry.direct_update);
        assert_eq!(entry.dependent_chains, vec!["mkdirp", "optimist"]);
    }

    #[test]
    fn test_version_suffix_stripped() {
        let input = "\
### semver (→ 7.5.4 available)
1. node-gyp@9.4.0 → semver@7.5.2
";
        let map = parse_relationships(input);
        let entry = map.get("semver").unwrap();
        assert_eq!(entry.dependent_chains, vec!["node-gyp"]);
    }

    #[test]
    fn test_duplicate_parents_deduplicated() {
        let input = "\
### minimist (→ 1.2.8 available)
1. mkdirp@0.5.1 → minimist@1.2.5
2. mkdirp@1.0.0 → minimist@1.2.6
";
        let map = parse_relationships(input);
        let entry = map.get("minimist").unwrap();
        assert_eq!(entry.dependent_chains, vec!["mkdirp"]);
    }

    #[test]
    fn test_multiple_packages() {
        let input = "\
### minimist (→ 1.2.8 available)
1. mkdirp@0.5.1 → minimist@1.2.5

### lodash (→ 4.17.21 available)
1. cli-table@0.3.1 → lodash@4.17.20
2. inquirer@8.2.0 → lodash@4.17.19
";
        let map = parse_relationships(input);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("minimist").unwrap().dependent_chains, vec!["mkdirp"]);
        assert_eq!(
            map.get("lodash").unwrap().dependent_chains,
            vec!["cli-table", "inquirer"]
        );
    }

    #[test]
    fn test_unnumbered_lines_ignored() {
        let input = "\
### minimist (→ 1.2.8 available)
reached through → minimist
1. mkdirp@0.5.1 → minimist@1.2.5
";
        let map = parse_relationships(input);
        let entry = map.get("minimist").unwrap();
        assert_eq!(entry.dependent_chains, vec!["mkdirp"]);
    }

    #[test]
    fn test_package_with_no_chains() {
        let input = "### lodash (→ 4.17.21 available)\n";
        let map = parse_relationships(input);
        let entry = map.get("lodash").unwrap();
        assert!(entry.direct_update);
        assert!(entry.dependent_chains.is_empty());
    }
}
