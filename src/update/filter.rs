//! Direct vs transitive update classification
//!
//! Combines the parsed update records with the relationship map to
//! decide which records should be written to package.json directly and
//! which will arrive transitively through a parent package.

use crate::domain::{RelationshipMap, UpdateRecord};
use serde::Serialize;

/// An update excluded from direct application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitiveUpdate {
    /// Package that will not be written to the manifest
    pub package: String,
    /// Parent packages the update flows through, in report order
    pub chains: Vec<String>,
}

impl TransitiveUpdate {
    /// Comma-joined parent chain for display
    pub fn chain_display(&self) -> String {
        self.chains.join(", ")
    }
}

/// Result of partitioning the parsed records
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Records to apply to the manifest
    pub direct: Vec<UpdateRecord>,
    /// Records that will arrive through parent packages
    pub transitive: Vec<TransitiveUpdate>,
}

/// Partition records into direct and transitive updates
///
/// A record is direct when its package has no relationship entry, when
/// the entry marks it as a direct update target, or when the entry has
/// no dependent chains. Everything else is transitive and only
/// reported, never written.
pub fn partition_updates(
    records: Vec<UpdateRecord>,
    relationships: &RelationshipMap,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for record in records {
        match relationships.get(&record.package) {
            Some(entry) if !entry.direct_update && !entry.dependent_chains.is_empty() => {
                outcome.transitive.push(TransitiveUpdate {
                    package: record.package,
                    chains: entry.dependent_chains.clone(),
                });
            }
            _ => outcome.direct.push(record),
        }
    }

    outcome
}
