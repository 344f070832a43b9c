//! Manifest file reading
//!
//! This module provides functionality to:
//! - Locate package.json in a project directory
//! - Extract the set of declared runtime dependency names

mod package_json;

pub use package_json::PackageJson;

use crate::error::ManifestError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Manifest filename looked up in the project directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// Path of the manifest inside `project_dir`
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILENAME)
}

/// Read package.json from `project_dir`
pub fn read_manifest(project_dir: &Path) -> Result<PackageJson, ManifestError> {
    let path = manifest_path(project_dir);
    let content = std::fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(&path)
        } else {
            ManifestError::read_error(&path, e)
        }
    })?;

    PackageJson::parse(&content, &path)
}

/// Names declared under `dependencies` in `project_dir`'s package.json
pub fn read_runtime_dependencies(project_dir: &Path) -> Result<BTreeSet<String>, ManifestError> {
    Ok(read_manifest(project_dir)?.runtime_dependency_names())
}
