//! # Punchline HTTP Server Module
//!
//! Axum server exposing the joke collection.
//!
//! # Endpoints
//!
//! - `/ping`, `/health` - Liveness
//! - `/jokes` - List (filter, sort, paginate), create, batch delete
//! - `/jokes/random`, `/jokes/ten`, `/jokes/random/:count` - Random picks
//! - `/jokes/:type/random`, `/jokes/:type/ten` - By type
//! - `/jokes/:id`, `/jokes/:id/like`, `/jokes/:id/dislike` - Single record
//! - `/admin/save` - Snapshot to the data file

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod joke_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use joke_routes::JokesState;
pub use server::{build_router, HttpServer};
