//! Core domain models for npmup
//!
//! This module contains the fundamental types used throughout the application:
//! - Outdated package entries produced by the fetch/classify step
//! - The selection set mutated by the interactive list
//! - Semantic version change classification

mod outdated_entry;
mod selection;
mod version_change;

pub use outdated_entry::OutdatedEntry;
pub use selection::SelectionSet;
pub use version_change::VersionChangeType;
