//! package.json parser for Node.js projects
//!
//! Only `dependencies` decides classification. devDependencies,
//! peerDependencies and optionalDependencies are read so that verbose
//! output can report them, but anything outside `dependencies` counts as dev.

use crate::error::ManifestError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// The subset of package.json that npmup reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    /// Package name, if declared
    #[serde(default)]
    pub name: Option<String>,
    /// Runtime dependencies; `null` is treated as absent
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, String>>,
    /// Development dependencies, only counted
    #[serde(default)]
    pub dev_dependencies: Option<Value>,
    /// Peer dependencies, only counted
    #[serde(default)]
    pub peer_dependencies: Option<Value>,
    /// Optional dependencies, only counted
    #[serde(default)]
    pub optional_dependencies: Option<Value>,
}

impl PackageJson {
    /// Parse package.json content. `path` is only used for error messages.
    ///
    /// The top level must be a JSON object.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let parse_error = |message: String| ManifestError::json_parse_error(path, message);

        let value: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        if !value.is_object() {
            return Err(parse_error("expected a JSON object".to_string()));
        }
        serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))
    }

    /// Names declared as runtime dependencies
    pub fn runtime_dependency_names(&self) -> BTreeSet<String> {
        self.dependencies
            .iter()
            .flat_map(BTreeMap::keys)
            .cloned()
            .collect()
    }

    /// Total number of declared dependencies across all sections.
    ///
    /// Sections other than `dependencies` count only when they are objects.
    pub fn declared_count(&self) -> usize {
        let section_len = |section: &Option<Value>| {
            section
                .as_ref()
                .and_then(Value::as_object)
                .map_or(0, |deps| deps.len())
        };
        self.dependencies.as_ref().map_or(0, BTreeMap::len)
            + section_len(&self.dev_dependencies)
            + section_len(&self.peer_dependencies)
            + section_len(&self.optional_dependencies)
    }
}
