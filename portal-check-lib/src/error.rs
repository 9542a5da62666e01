//! Error handling for portal probing operations.
//!
//! Per-probe failures (`Transport`, `Timeout`, `Internal` raised inside a
//! worker) are carried inside a `ProbeResult` and never abort a run. Only
//! `FileError` is expected to reach the process boundary.

use std::fmt;

/// Exit code used when the input list or the log file cannot be accessed.
pub const FILE_ERROR_EXIT_CODE: i32 = 2;

/// Main error type for portal probing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// DNS, connection, TLS or other transport failure for a single probe
    Transport { url: String, message: String },

    /// The HTTP client gave up waiting for a single probe
    Timeout { url: String, message: String },

    /// File I/O errors when reading the URL list or opening the log
    FileError { path: String, message: String },

    /// Internal errors (client construction, a panicking worker)
    Internal { message: String },
}

impl ProbeError {
    /// Create a new transport error for a probe URL.
    pub fn transport<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new timeout error for a probe URL.
    pub fn timeout<U: Into<String>, M: Into<String>>(url: U, message: M) -> Self {
        Self::Timeout {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Convert a `reqwest::Error` raised while probing `url`.
    pub fn from_reqwest<U: Into<String>>(url: U, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(url, err.to_string())
        } else {
            Self::transport(url, describe_reqwest_error(err))
        }
    }

    /// Process exit code for errors that end the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileError { .. } => FILE_ERROR_EXIT_CODE,
            _ => 1,
        }
    }
}

/// Flatten the source chain into one message so DNS and TLS causes show up.
fn describe_reqwest_error(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = std::error::Error::source(cause);
    }
    message
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { message, .. } => write!(f, "{}", message),
            Self::Timeout { message, .. } => write!(f, "Timed out: {}", message),
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::Internal { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for ProbeError {}
