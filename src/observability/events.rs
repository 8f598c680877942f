//! Lifecycle events
//!
//! Every notable thing the service does outside of request handling is a
//! variant here, so log lines stay greppable by a fixed name.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Jokes loaded from the data file
    DataLoaded,
    /// Listener bound, ready for requests
    ServerListening,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Persistence
    /// Snapshot written to the data file
    SnapshotSaved,
    /// Snapshot could not be written
    SnapshotFailed,
    /// Sequential ids written into a data file
    IdsAssigned,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "PUNCHLINE_STARTUP_BEGIN",
            Event::DataLoaded => "DATA_LOADED",
            Event::ServerListening => "PUNCHLINE_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::SnapshotSaved => "SNAPSHOT_SAVED",
            Event::SnapshotFailed => "SNAPSHOT_FAILED",
            Event::IdsAssigned => "IDS_ASSIGNED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::SnapshotFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
