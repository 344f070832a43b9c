//! CLI argument parsing module for npmup

use clap::Parser;
use std::path::PathBuf;

/// Interactively pick outdated npm dependencies to upgrade
#[derive(Parser, Debug, Clone)]
#[command(
    name = "npmup",
    version,
    about = "Interactively pick outdated npm dependencies to upgrade"
)]
pub struct CliArgs {
    /// Project directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Dry run mode - print the install commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
