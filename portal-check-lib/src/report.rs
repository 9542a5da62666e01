//! Result tallying and the persisted probe log.
//!
//! A `Reporter` is owned by the single flow that consumes probe results. It
//! updates the `Tally` and appends one log line per result.

use crate::error::ProbeError;
use crate::types::{ProbeResult, StatusCategory};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Running counters for one probe run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Number of input URLs submitted
    pub total: usize,
    pub count_200: usize,
    pub count_404: usize,
    pub count_403: usize,
    /// Probe URLs that returned 200, in completion order
    pub successful_urls: Vec<String>,
}

/// Severity of a persisted log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Append-only log of probe results.
///
/// Lines look like `2024-05-01 12:00:00,123 - INFO - https://...: 404`.
pub struct ProbeLog<W: Write> {
    writer: W,
}

impl ProbeLog<File> {
    /// Open (or create) the log file in append mode.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProbeError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ProbeError::file_error(path.to_string_lossy(), e.to_string()))?;
        Ok(Self::new(file))
    }
}

impl<W: Write> ProbeLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one line and flush it.
    pub fn write_line(&mut self, level: LogLevel, message: &str) -> io::Result<()> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        writeln!(self.writer, "{} - {} - {}", timestamp, level, message)?;
        self.writer.flush()
    }

    /// Persist a probe result: INFO for any HTTP status, ERROR for failures.
    pub fn record(&mut self, result: &ProbeResult) -> io::Result<()> {
        match &result.outcome {
            Ok(status) => self.write_line(LogLevel::Info, &format!("{}: {}", result.url, status)),
            Err(e) => self.write_line(LogLevel::Error, &format!("{}: Error: {}", result.url, e)),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Consumes probe results, keeping the tally and the persisted log.
pub struct Reporter<W: Write> {
    tally: Tally,
    log: ProbeLog<W>,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter for a run of `total` input URLs.
    pub fn new(log: ProbeLog<W>, total: usize) -> Self {
        Self {
            tally: Tally {
                total,
                ..Tally::default()
            },
            log,
        }
    }

    /// Count and persist a single result, returning its category.
    ///
    /// A failed log write is reported through tracing and does not stop the run.
    pub fn record(&mut self, result: &ProbeResult) -> StatusCategory {
        let category = result.category();
        match category {
            StatusCategory::Found => {
                self.tally.count_200 += 1;
                self.tally.successful_urls.push(result.url.clone());
            }
            StatusCategory::NotFound => self.tally.count_404 += 1,
            StatusCategory::Forbidden => self.tally.count_403 += 1,
            StatusCategory::Other(_) | StatusCategory::Failed => {}
        }

        if let Err(e) = self.log.record(result) {
            tracing::warn!(url = %result.url, error = %e, "failed to write probe log line");
        }
        tracing::debug!(url = %result.url, ?category, "probe completed");

        category
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Finish the run, returning the tally and the log writer.
    pub fn finish(self) -> (Tally, W) {
        (self.tally, self.log.into_inner())
    }
}
