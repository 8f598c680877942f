//! punchline entry point
//!
//! Parses arguments and dispatches via `cli::run`. Errors go to stderr
//! with a non-zero exit.

use punchline::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
