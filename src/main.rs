//! npmup - Interactive upgrader for outdated npm dependencies
//!
//! Lists outdated packages of the project in the current directory, lets the
//! user pick which to upgrade and runs `npm i` for the selection.

use clap::Parser;
use colored::Colorize;
use npmup::cli::CliArgs;
use npmup::orchestrator::Orchestrator;
use npmup::package_manager::SystemPackageManager;
use npmup::tui::{self, Outcome};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("npmup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
        if args.dry_run {
            eprintln!("Mode: dry-run");
        }
    }

    let orchestrator = Orchestrator::new(args.clone(), SystemPackageManager::new());
    let entries = orchestrator.collect(!args.verbose)?;

    if entries.is_empty() {
        println!("{}", "All dependencies are up to date.".green());
        return Ok(ExitCode::SUCCESS);
    }

    let selection = match tui::run(entries.clone())? {
        Outcome::Confirmed(selection) => selection,
        Outcome::Cancelled => {
            if args.verbose {
                eprintln!("Cancelled, nothing installed");
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    let color = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();
    orchestrator.install(&entries, &selection, color, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
