//! npmup - Interactive upgrader for outdated npm dependencies
//!
//! This library provides the pieces of the workflow:
//! - Reading package.json and classifying runtime vs dev dependencies
//! - Running and parsing `npm outdated --json`
//! - The interactive selection list
//! - Partitioned `npm i [-D] name@latest` invocations

pub mod cli;
pub mod domain;
pub mod error;
pub mod install;
pub mod manifest;
pub mod orchestrator;
pub mod outdated;
pub mod package_manager;
pub mod progress;
pub mod tui;
