//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit.

use std::fmt;
use std::io;

use crate::http_server::ApiError;
use crate::store::{PersistError, StoreError};

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Logging or runtime could not be set up
    BootFailed,
    /// Joke file missing, unreadable or inconsistent
    DataError,
    /// Socket or file I/O failed
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::BootFailed => "PUNCHLINE_CLI_BOOT_FAILED",
            Self::DataError => "PUNCHLINE_CLI_DATA_ERROR",
            Self::IoError => "PUNCHLINE_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Data file error
    pub fn data_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DataError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<PersistError> for CliError {
    fn from(e: PersistError) -> Self {
        Self::data_error(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::data_error(e.to_string())
    }
}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        Self::io_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::data_error("Duplicate joke id: 3");
        assert_eq!(
            err.to_string(),
            "PUNCHLINE_CLI_DATA_ERROR: Duplicate joke id: 3"
        );
    }

    #[test]
    fn test_store_error_is_data_error() {
        let err = CliError::from(StoreError::DuplicateId(3));
        assert_eq!(err.code(), &CliErrorCode::DataError);
        assert_eq!(err.message(), "Duplicate joke id: 3");
    }
}
