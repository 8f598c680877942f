//! CLI module for punchline
//!
//! Provides command-line interface for:
//! - serve: Load the joke file and serve the HTTP API
//! - add-ids: Assign sequential ids in a joke file
//! - check: Validate a joke file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{add_ids, boot_store, check, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
