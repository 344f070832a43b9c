//! Workflow coordination
//!
//! This module provides:
//! - Collection: read manifest → query outdated → classify
//! - Installation of a confirmed selection
//! - Verbose diagnostics on stderr
//!
//! The interactive step between the two lives in [`crate::tui`]; the
//! orchestrator never touches the terminal itself.

use crate::cli::CliArgs;
use crate::domain::{OutdatedEntry, SelectionSet};
use crate::error::AppError;
use crate::install::{execute_plan, InstallOptions, InstallPlan};
use crate::manifest::{manifest_path, read_manifest};
use crate::outdated::collect_outdated;
use crate::package_manager::{OutdatedQuerySource, PackageInstaller};
use crate::progress::Progress;
use std::io::Write;

/// Orchestrator for the fetch → select → install workflow
pub struct Orchestrator<P> {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Package manager used for both the query and the installs
    package_manager: P,
}

impl<P> Orchestrator<P>
where
    P: OutdatedQuerySource + PackageInstaller,
{
    /// Create a new orchestrator
    pub fn new(args: CliArgs, package_manager: P) -> Self {
        Self {
            args,
            package_manager,
        }
    }

    /// Read the manifest and collect classified outdated entries, sorted by name
    pub fn collect(&self, show_progress: bool) -> Result<Vec<OutdatedEntry>, AppError> {
        let project_dir = &self.args.path;

        // Manifest first: a missing package.json fails before npm is spawned
        let manifest = read_manifest(project_dir)?;
        let runtime = manifest.runtime_dependency_names();
        self.log(format_args!(
            "Read {} for {} ({} declared, {} runtime)",
            manifest_path(project_dir).display(),
            manifest.name.as_deref().unwrap_or("unnamed package"),
            manifest.declared_count(),
            runtime.len()
        ));

        let mut progress = Progress::new(show_progress);
        progress.spinner("Checking for outdated packages...");
        self.log(format_args!("Running {}", self.package_manager.command_line()));
        let result = collect_outdated(&self.package_manager, project_dir, &runtime);
        progress.finish_and_clear();
        let entries = result?;

        if self.args.verbose {
            eprintln!("Found {} outdated package(s)", entries.len());
            for entry in &entries {
                eprintln!(
                    "  {} (wanted {}, {})",
                    entry,
                    entry.wanted,
                    entry.change_type().label()
                );
            }
        }

        Ok(entries)
    }

    /// Install the confirmed selection, runtime group first.
    ///
    /// An empty selection is a no-op. Returns the executed plan.
    pub fn install(
        &self,
        entries: &[OutdatedEntry],
        selection: &SelectionSet,
        color: bool,
        out: &mut dyn Write,
    ) -> Result<InstallPlan, AppError> {
        let plan = InstallPlan::from_selection(entries, selection);
        if plan.is_empty() {
            self.log(format_args!("Nothing selected, skipping install"));
            return Ok(plan);
        }

        self.log(format_args!(
            "Installing {} runtime and {} dev package(s)",
            plan.runtime.len(),
            plan.dev.len()
        ));

        let options = InstallOptions {
            dry_run: self.args.dry_run,
            color,
        };
        execute_plan(
            &plan,
            &self.package_manager,
            &self.args.path,
            options,
            out,
        )?;

        Ok(plan)
    }

    fn log(&self, message: std::fmt::Arguments<'_>) {
        if self.args.verbose {
            eprintln!("{}", message);
        }
    }
}
