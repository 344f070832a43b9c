//! Set of package names marked for upgrade

use std::collections::BTreeSet;

/// Package names currently selected in the interactive list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    names: BTreeSet<String>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `name`. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    /// Returns true if `name` is selected
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of selected names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
