//! Core data types for portal probing.
//!
//! This module defines the probe targets, per-probe results, outcome
//! categories and the run configuration.

use crate::error::ProbeError;
use std::path::PathBuf;

/// Fixed relative path of the append-only probe log.
pub const DEFAULT_LOG_PATH: &str = "url_checker.log";

/// Default number of probes allowed in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// One probe to perform, derived from a single input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    /// Domain label extracted from the input URL (may be empty)
    pub domain: String,

    /// Login page URL built from the domain label
    pub url: String,
}

/// Result of a single probe.
///
/// Exactly one `ProbeResult` is produced per `ProbeTarget`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// The probed login page URL
    pub url: String,

    /// Domain label the URL was built from
    pub domain: String,

    /// HTTP status code of the completed exchange, or why there was none
    pub outcome: Result<u16, ProbeError>,
}

impl ProbeResult {
    /// Build a result for `target` from a probe outcome.
    pub fn new(target: ProbeTarget, outcome: Result<u16, ProbeError>) -> Self {
        Self {
            url: target.url,
            domain: target.domain,
            outcome,
        }
    }

    /// Category used for tallying.
    pub fn category(&self) -> StatusCategory {
        match &self.outcome {
            Ok(code) => StatusCategory::from_status(*code),
            Err(_) => StatusCategory::Failed,
        }
    }
}

/// How a probe result is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// HTTP 200, a reachable login page
    Found,
    /// HTTP 404
    NotFound,
    /// HTTP 403
    Forbidden,
    /// Any other status, logged but not counted
    Other(u16),
    /// Transport failure, no HTTP exchange
    Failed,
}

impl StatusCategory {
    pub fn from_status(code: u16) -> Self {
        match code {
            200 => Self::Found,
            404 => Self::NotFound,
            403 => Self::Forbidden,
            other => Self::Other(other),
        }
    }
}

/// Configuration for a probing run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Maximum number of probes in flight at once
    /// Default: 10, Range: 1-100
    pub concurrency: usize,

    /// Where persisted log lines are appended
    /// Default: url_checker.log in the working directory
    pub log_path: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl ProbeConfig {
    /// Set the concurrency ceiling, capped to 1..=100.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, 100);
        self
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCategory::Found => write!(f, "200 - Jira handler found"),
            StatusCategory::NotFound => write!(f, "404"),
            StatusCategory::Forbidden => write!(f, "403"),
            StatusCategory::Other(code) => write!(f, "{}", code),
            StatusCategory::Failed => write!(f, "Error"),
        }
    }
}
