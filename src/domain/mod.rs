//! Core domain types shared across the pipeline

mod relationship;
mod update_record;

pub use relationship::{RelationshipEntry, RelationshipMap};
pub use update_record::{UpdateAction, UpdateRecord};
