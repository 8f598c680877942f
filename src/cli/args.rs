//! CLI argument definitions using clap
//!
//! Commands:
//! - punchline serve --data <path> [--port <port>]
//! - punchline add-ids --data <path>
//! - punchline check --data <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::config::DEFAULT_PORT;

/// Punchline - a small HTTP service for jokes
#[derive(Parser, Debug)]
#[command(name = "punchline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log at DEBUG unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the joke file and serve the HTTP API
    Serve {
        /// JSON array file holding the jokes
        #[arg(long, default_value = "./jokes/index.json")]
        data: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Allowed CORS origin (repeatable). Any origin when omitted.
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,

        /// Write the collection back to the data file after shutdown
        #[arg(long)]
        save_on_shutdown: bool,
    },

    /// Rewrite the joke file so every record has id = position + 1
    AddIds {
        /// JSON array file holding the jokes
        #[arg(long, default_value = "./jokes/index.json")]
        data: PathBuf,
    },

    /// Load and validate the joke file without serving
    Check {
        /// JSON array file holding the jokes
        #[arg(long, default_value = "./jokes/index.json")]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
