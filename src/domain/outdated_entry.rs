//! Outdated package entry

use super::VersionChangeType;
use std::fmt;

/// A package reported as outdated, classified against the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedEntry {
    /// Package name (unique key)
    pub name: String,
    /// Installed version
    pub current: String,
    /// Highest version satisfying the declared range
    pub wanted: String,
    /// Latest published version
    pub latest: String,
    /// Whether this is not a declared runtime dependency
    pub is_dev: bool,
}

impl OutdatedEntry {
    /// Creates a new entry
    pub fn new(
        name: impl Into<String>,
        current: impl Into<String>,
        wanted: impl Into<String>,
        latest: impl Into<String>,
        is_dev: bool,
    ) -> Self {
        Self {
            name: name.into(),
            current: current.into(),
            wanted: wanted.into(),
            latest: latest.into(),
            is_dev,
        }
    }

    /// Kind of change from the installed version to the latest one
    pub fn change_type(&self) -> VersionChangeType {
        VersionChangeType::from_versions(&self.current, &self.latest)
    }
}

impl fmt::Display for OutdatedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dev_marker = if self.is_dev { " (dev)" } else { "" };
        write!(
            f,
            "{} {} -> {}{}",
            self.name, self.current, self.latest, dev_marker
        )
    }
}
