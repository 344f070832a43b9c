//! Install planning and execution
//!
//! Selected names are split into a runtime group and a dev group. Each
//! non-empty group becomes one install invocation; runtime runs first and a
//! failure stops before the dev group.

use crate::domain::{OutdatedEntry, SelectionSet};
use crate::error::InstallError;
use crate::package_manager::{InstallRequest, PackageInstaller};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Selected packages partitioned by dependency kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    /// Runtime dependencies, in display order
    pub runtime: Vec<String>,
    /// Dev (and other non-runtime) dependencies, in display order
    pub dev: Vec<String>,
}

impl InstallPlan {
    /// Partition `selection` using the `is_dev` flag of each entry.
    ///
    /// Group order follows `entries`, which is sorted by name.
    pub fn from_selection(entries: &[OutdatedEntry], selection: &SelectionSet) -> Self {
        let mut plan = Self::default();
        for entry in entries.iter().filter(|e| selection.contains(&e.name)) {
            if entry.is_dev {
                plan.dev.push(entry.name.clone());
            } else {
                plan.runtime.push(entry.name.clone());
            }
        }
        plan
    }

    /// Returns true if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty()
    }

    /// Invocations to issue, runtime group first, empty groups skipped
    pub fn requests(&self) -> Vec<InstallRequest> {
        [(&self.runtime, false), (&self.dev, true)]
            .into_iter()
            .filter(|(names, _)| !names.is_empty())
            .map(|(names, dev)| {
                let specs = names.iter().map(|n| latest_spec(n)).collect();
                InstallRequest::new(specs, dev)
            })
            .collect()
    }
}

/// Install specifier pinned to the `latest` dist-tag
pub fn latest_spec(name: &str) -> String {
    format!("{}@latest", name)
}

/// Options controlling install execution
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Print commands without running them
    pub dry_run: bool,
    /// Use colors in echoed commands
    pub color: bool,
}

/// Run every request of `plan`, stopping at the first failure.
///
/// Each command is echoed to `out` as `> npm i ...` before it runs; the
/// package manager itself writes straight to the terminal.
pub fn execute_plan<I: PackageInstaller + ?Sized>(
    plan: &InstallPlan,
    installer: &I,
    project_dir: &Path,
    options: InstallOptions,
    out: &mut dyn Write,
) -> Result<(), InstallError> {
    for request in plan.requests() {
        let command = request.command_line(installer.program());
        echo_command(&command, options, out);

        if options.dry_run {
            continue;
        }

        let result = installer.install(&request, project_dir)?;
        if !result.success {
            return Err(InstallError::failed(result.command, result.status));
        }
    }
    Ok(())
}

fn echo_command(command: &str, options: InstallOptions, out: &mut dyn Write) {
    let prefix = if options.dry_run { "(dry-run) " } else { "" };
    // Echo failures are not worth aborting an install over
    let _ = if options.color {
        writeln!(
            out,
            "\n{}{} {}",
            prefix.cyan(),
            ">".dimmed(),
            command.bright_white().bold()
        )
    } else {
        writeln!(out, "\n{}> {}", prefix, command)
    };
    let _ = out.flush();
}
