// ================================================================
// File: tierwatch-common/src/error.rs
// ================================================================

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Status query error: {0}")]
    StatusQuery(String),

    #[error("Notification error: {0}")]
    Notify(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Coarse classification used by the monitor to decide whether an error
/// ends the process or only the current iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Auth,
    StatusQuery,
    Notify,
    Unclassified,
}

impl ErrorKind {
    /// Startup errors halt the process; everything else is contained.
    pub fn is_fatal(self) -> bool {
        matches!(self, ErrorKind::Config | ErrorKind::Auth)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Config => write!(f, "config"),
            ErrorKind::Auth => write!(f, "auth"),
            ErrorKind::StatusQuery => write!(f, "status-query"),
            ErrorKind::Notify => write!(f, "notify"),
            ErrorKind::Unclassified => write!(f, "unclassified"),
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Auth(_) => ErrorKind::Auth,
            Error::StatusQuery(_) => ErrorKind::StatusQuery,
            Error::Notify(_) => ErrorKind::Notify,
            Error::Http(_) | Error::Parse(_) => ErrorKind::Unclassified,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind().is_fatal()
    }
}
