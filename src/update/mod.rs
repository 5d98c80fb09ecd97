//! Update classification

mod filter;

pub use filter::{partition_updates, FilterOutcome, TransitiveUpdate};
