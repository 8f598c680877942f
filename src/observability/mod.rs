//! Observability for punchline
//!
//! Lifecycle events are typed (`Event`) and emitted through `tracing`.
//! Request-level tracing comes from `tower_http::trace::TraceLayer`, wired
//! in by the HTTP server.
//!
//! # Usage
//!
//! ```ignore
//! use punchline::log_event;
//! use punchline::observability::{init_logging, Event};
//!
//! init_logging(false)?;
//! log_event!(Event::DataLoaded, jokes = 412, path = %path.display());
//! ```

mod events;

pub use events::Event;

use std::io;

use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is INFO, or DEBUG when
/// `verbose`.
pub fn init_logging(verbose: bool) -> Result<(), SetGlobalDefaultError> {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };
    set_global_default(
        Registry::default()
            .with(fmt::Layer::default().compact().with_writer(io::stderr))
            .with(
                EnvFilter::builder()
                    .with_default_directive(default_level.into())
                    .from_env_lossy(),
            ),
    )
}

/// Log a lifecycle event, followed by any `tracing` fields.
///
/// Failure events go out at ERROR, everything else at INFO. The event
/// name is recorded in the `event` field.
#[macro_export]
macro_rules! log_event {
    ($event:expr $(, $($fields:tt)+)?) => {{
        let event: $crate::observability::Event = $event;
        if event.is_failure() {
            ::tracing::error!(event = event.as_str() $(, $($fields)+)?);
        } else {
            ::tracing::info!(event = event.as_str() $(, $($fields)+)?);
        }
    }};
}
