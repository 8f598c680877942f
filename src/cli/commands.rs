//! CLI command implementations
//!
//! `serve` boots in a fixed order: load the file, build the store, bind,
//! serve, and optionally save once after shutdown.

use std::path::Path;
use std::sync::Arc;

use crate::http_server::{HttpServer, HttpServerConfig, JokesState};
use crate::log_event;
use crate::observability::{init_logging, Event};
use crate::store::{assign_ids, load_jokes, JokeStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments, install logging and run the chosen command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose)
        .map_err(|e| CliError::boot_failed(format!("Failed to install logger: {}", e)))?;
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            data,
            host,
            port,
            cors_origins,
            save_on_shutdown,
        } => serve(
            HttpServerConfig {
                host,
                port,
                cors_origins,
                data_file: data,
            },
            save_on_shutdown,
        ),
        Command::AddIds { data } => add_ids(&data),
        Command::Check { data } => check(&data),
    }
}

/// Load the data file into a store
pub fn boot_store(data_file: &Path) -> CliResult<JokeStore> {
    let records = load_jokes(data_file)?;
    let store = JokeStore::initialize(records)?;

    log_event!(
        Event::DataLoaded,
        path = %data_file.display(),
        jokes = store.len(),
        last_id = store.last_id()
    );
    Ok(store)
}

/// Serve the HTTP API until a shutdown signal
pub fn serve(config: HttpServerConfig, save_on_shutdown: bool) -> CliResult<()> {
    log_event!(Event::BootStart);

    let store = boot_store(&config.data_file)?;
    let state = Arc::new(JokesState::new(store, config.data_file.clone()));
    let server = HttpServer::new(config, state.clone());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::io_error(format!("HTTP server failed: {}", e)))
    })?;

    if save_on_shutdown {
        state.persist()?;
    }

    Ok(())
}

/// Give every record in the file a sequential id
pub fn add_ids(data_file: &Path) -> CliResult<()> {
    let count = assign_ids(data_file)?;
    log_event!(Event::IdsAssigned, path = %data_file.display(), jokes = count);
    println!("IDs added successfully to all {} items in {}", count, data_file.display());
    Ok(())
}

/// Validate the file the way `serve` would load it
pub fn check(data_file: &Path) -> CliResult<()> {
    let store = boot_store(data_file)?;
    println!(
        "{}: {} jokes, last id {}",
        data_file.display(),
        store.len(),
        store.last_id()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliErrorCode;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_boot_store_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        fs::write(
            &path,
            json!([
                {"type": "general", "setup": "a", "punchline": "b"},
                {"id": 9, "type": "general", "setup": "c", "punchline": "d"}
            ])
            .to_string(),
        )
        .unwrap();

        let store = boot_store(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.last_id(), 9);
    }

    #[test]
    fn test_boot_store_duplicate_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        fs::write(
            &path,
            json!([
                {"id": 1, "type": "general", "setup": "a", "punchline": "b"},
                {"id": 1, "type": "general", "setup": "c", "punchline": "d"}
            ])
            .to_string(),
        )
        .unwrap();

        let err = boot_store(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::DataError);
    }

    #[test]
    fn test_add_ids_then_check() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        fs::write(
            &path,
            json!([
                {"id": 1, "type": "general", "setup": "a", "punchline": "b"},
                {"id": 1, "type": "general", "setup": "c", "punchline": "d"}
            ])
            .to_string(),
        )
        .unwrap();

        add_ids(&path).unwrap();
        check(&path).unwrap();
    }
}
