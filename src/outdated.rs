//! Outdated report parsing and dependency classification
//!
//! `npm outdated --json` prints an object keyed by package name:
//!
//! ```json
//! { "lodash": { "current": "4.17.20", "wanted": "4.17.21", "latest": "4.17.21" } }
//! ```
//!
//! Packages reported at several locations (workspaces) map to an array of
//! such objects instead. In JSON mode npm also reports its own failures on
//! stdout as `{ "error": { "code": ..., "summary": ..., "detail": ... } }`.

use crate::domain::OutdatedEntry;
use crate::error::OutdatedError;
use crate::package_manager::OutdatedQuerySource;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Shown in the `Current` column for declared but uninstalled packages
pub const MISSING_VERSION: &str = "MISSING";

/// Version triple reported for one package
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DepVersions {
    /// Installed version, absent when not installed
    #[serde(default)]
    pub current: Option<String>,
    /// Highest version matching the declared range
    #[serde(default)]
    pub wanted: String,
    /// Latest published version
    #[serde(default)]
    pub latest: String,
}

/// Parsed outdated report; iteration yields names in ascending byte order
pub type OutdatedReport = BTreeMap<String, DepVersions>;

/// Parse raw `npm outdated --json` output
pub fn parse_outdated_report(raw: &str, command: &str) -> Result<OutdatedReport, OutdatedError> {
    let invalid = |message: String| OutdatedError::invalid_output(command, message, raw.trim());

    let value: Value = serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(invalid("expected a JSON object".to_string()));
    };

    if let Some(error) = map.get("error").and_then(reported_error) {
        let (code, summary) = error;
        return Err(OutdatedError::Reported {
            command: command.to_string(),
            code,
            summary,
        });
    }

    let mut report = OutdatedReport::new();
    for (name, value) in map {
        let mut locations = match value {
            Value::Array(locations) => locations,
            other => vec![other],
        };
        if locations.iter().any(|location| !location.is_object()) {
            return Err(invalid(format!("package '{}': expected an object", name)));
        }
        if locations.is_empty() {
            return Err(invalid(format!("package '{}' has no entries", name)));
        }
        let versions = serde_json::from_value::<DepVersions>(locations.swap_remove(0))
            .map_err(|e| invalid(format!("package '{}': {}", name, e)))?;
        report.insert(name, versions);
    }

    Ok(report)
}

/// npm's JSON error object carries `code`/`summary` and never `latest`
fn reported_error(value: &Value) -> Option<(String, String)> {
    let obj = value.as_object()?;
    if obj.contains_key("latest") || !(obj.contains_key("code") || obj.contains_key("summary")) {
        return None;
    }
    let field = |key: &str| {
        obj.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Some((field("code"), field("summary")))
}

/// Label each reported package as runtime or dev and sort by name.
///
/// Anything not declared under `dependencies` is treated as dev.
pub fn classify(report: OutdatedReport, runtime: &BTreeSet<String>) -> Vec<OutdatedEntry> {
    let mut entries: Vec<OutdatedEntry> = report
        .into_iter()
        .map(|(name, versions)| {
            let is_dev = !runtime.contains(&name);
            OutdatedEntry::new(
                name,
                versions
                    .current
                    .unwrap_or_else(|| MISSING_VERSION.to_string()),
                versions.wanted,
                versions.latest,
                is_dev,
            )
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Query `source` in `project_dir` and classify the result against `runtime`
pub fn collect_outdated<S: OutdatedQuerySource + ?Sized>(
    source: &S,
    project_dir: &Path,
    runtime: &BTreeSet<String>,
) -> Result<Vec<OutdatedEntry>, OutdatedError> {
    let raw = source.query_outdated(project_dir)?;
    let report = parse_outdated_report(&raw, &source.command_line())?;
    Ok(classify(report, runtime))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMAND: &str = "npm outdated --json";

    fn runtime(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    struct CannedSource(&'static str);

    impl OutdatedQuerySource for CannedSource {
        fn command_line(&self) -> String {
            COMMAND.to_string()
        }

        fn query_outdated(&self, _project_dir: &Path) -> Result<String, OutdatedError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_parse_report() {
        let raw = r#"{
            "lodash": {"current": "4.17.20", "wanted": "4.17.21", "latest": "4.17.21", "location": "node_modules/lodash"}
        }"#;
        let report = parse_outdated_report(raw, COMMAND).unwrap();
        let lodash = &report["lodash"];
        assert_eq!(lodash.current.as_deref(), Some("4.17.20"));
        assert_eq!(lodash.wanted, "4.17.21");
        assert_eq!(lodash.latest, "4.17.21");
    }

    #[test]
    fn test_parse_empty_report() {
        let report = parse_outdated_report("{}\n", COMMAND).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_parse_empty_output_fails() {
        let result = parse_outdated_report("  \n", COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));
    }

    #[test]
    fn test_parse_garbage_keeps_raw_output() {
        let err = parse_outdated_report("npm ERR! something broke", COMMAND).unwrap_err();
        assert!(format!("{}", err).contains("npm ERR! something broke"));
    }

    #[test]
    fn test_parse_non_object_fails() {
        let result = parse_outdated_report("[1, 2]", COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));
    }

    #[test]
    fn test_parse_wrong_value_type_fails() {
        let result = parse_outdated_report(r#"{"a": "1.0.0"}"#, COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));

        let result = parse_outdated_report(r#"{"a": {"current": 1}}"#, COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));
    }

    #[test]
    fn test_parse_npm_error_object() {
        let raw = r#"{
            "error": {
                "code": "ENOENT",
                "summary": "Could not read package.json",
                "detail": ""
            }
        }"#;
        let err = parse_outdated_report(raw, COMMAND).unwrap_err();
        match err {
            OutdatedError::Reported { code, summary, .. } => {
                assert_eq!(code, "ENOENT");
                assert_eq!(summary, "Could not read package.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_package_named_error_is_not_npm_error() {
        let raw = r#"{"error": {"current": "1.0.0", "wanted": "1.0.0", "latest": "2.0.0"}}"#;
        let report = parse_outdated_report(raw, COMMAND).unwrap();
        assert_eq!(report["error"].latest, "2.0.0");
    }

    #[test]
    fn test_parse_missing_current() {
        let raw = r#"{"left-pad": {"wanted": "1.3.0", "latest": "1.3.0"}}"#;
        let report = parse_outdated_report(raw, COMMAND).unwrap();
        assert_eq!(report["left-pad"].current, None);

        let entries = classify(report, &runtime(&[]));
        assert_eq!(entries[0].current, MISSING_VERSION);
    }

    #[test]
    fn test_parse_workspace_array_uses_first() {
        let raw = r#"{
            "react": [
                {"current": "17.0.1", "wanted": "17.0.2", "latest": "18.2.0", "dependent": "web"},
                {"current": "17.0.0", "wanted": "17.0.2", "latest": "18.2.0", "dependent": "admin"}
            ]
        }"#;
        let report = parse_outdated_report(raw, COMMAND).unwrap();
        assert_eq!(report["react"].current.as_deref(), Some("17.0.1"));
    }

    #[test]
    fn test_parse_empty_array_fails() {
        let result = parse_outdated_report(r#"{"react": []}"#, COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));
    }

    #[test]
    fn test_parse_array_of_strings_fails() {
        let result = parse_outdated_report(r#"{"a": ["1.0.0", "1.0.0", "2.0.0"]}"#, COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));

        let result = parse_outdated_report(r#"{"a": [["x"]]}"#, COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));

        let raw = r#"{"a": [{"current": "1.0.0", "wanted": "1.0.0", "latest": "2.0.0"}, "2.0.0"]}"#;
        let result = parse_outdated_report(raw, COMMAND);
        assert!(matches!(result, Err(OutdatedError::InvalidOutput { .. })));
    }

    #[test]
    fn test_classify_dev_is_negated_membership() {
        let raw = r#"{
            "zod": {"current": "3.0.0", "wanted": "3.0.0", "latest": "3.22.0"},
            "@types/node": {"current": "18.0.0", "wanted": "18.0.0", "latest": "20.0.0"},
            "axios": {"current": "0.27.0", "wanted": "0.27.2", "latest": "1.6.0"}
        }"#;
        let runtime = runtime(&["zod", "axios"]);
        let entries = classify(parse_outdated_report(raw, COMMAND).unwrap(), &runtime);

        for entry in &entries {
            assert_eq!(entry.is_dev, !runtime.contains(&entry.name));
        }
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["@types/node", "axios", "zod"]);
    }

    #[test]
    fn test_collect_outdated() {
        let source = CannedSource(
            r#"{"b":{"current":"0.1.0","wanted":"0.1.0","latest":"0.2.0"},"a":{"current":"1.0.0","wanted":"1.2.0","latest":"2.0.0"}}"#,
        );
        let entries = collect_outdated(&source, Path::new("."), &runtime(&["a"])).unwrap();

        assert_eq!(
            entries,
            vec![
                OutdatedEntry::new("a", "1.0.0", "1.2.0", "2.0.0", false),
                OutdatedEntry::new("b", "0.1.0", "0.1.0", "0.2.0", true),
            ]
        );
    }
}
