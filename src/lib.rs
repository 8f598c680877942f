//! punchline - a small HTTP service for jokes
//!
//! An in-memory joke collection loaded from a JSON file, with random,
//! filtered and paginated reads, basic writes, and explicit snapshots
//! back to the file.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod store;
