//! Main portal checker implementation.
//!
//! `PortalChecker` turns input URLs into probe targets and drives the
//! concurrent processor against a transport.

use crate::concurrent::ConcurrentProcessor;
use crate::error::ProbeError;
use crate::protocols::{HttpTransport, Transport};
use crate::types::{ProbeConfig, ProbeResult, ProbeTarget};
use crate::utils::build_targets;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Coordinates probing of service desk login pages.
///
/// # Example
///
/// ```rust,no_run
/// use portal_check_lib::PortalChecker;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let checker = PortalChecker::new()?;
///     let urls = vec!["https://www.example.com".to_string()];
///
///     let mut results = checker.probe_urls(&urls);
///     while let Some(result) = results.recv().await {
///         println!("{}: {:?}", result.url, result.outcome);
///     }
///     Ok(())
/// }
/// ```
pub struct PortalChecker {
    /// Configuration settings for this checker instance
    config: ProbeConfig,
    /// Transport used for every probe
    transport: Arc<dyn Transport>,
}

impl PortalChecker {
    /// Create a checker with default configuration and an HTTP transport.
    ///
    /// Default settings:
    /// - Concurrency: 10
    /// - Log path: url_checker.log
    pub fn new() -> Result<Self, ProbeError> {
        Self::with_config(ProbeConfig::default())
    }

    /// Create a checker with custom configuration and an HTTP transport.
    pub fn with_config(config: ProbeConfig) -> Result<Self, ProbeError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a checker that probes through the given transport.
    pub fn with_transport(config: ProbeConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Probe the login page derived from each input URL.
    ///
    /// Results arrive in completion order; exactly one per input URL.
    pub fn probe_urls(&self, urls: &[String]) -> mpsc::Receiver<ProbeResult> {
        self.probe_targets(build_targets(urls))
    }

    /// Probe prepared targets.
    pub fn probe_targets(&self, targets: Vec<ProbeTarget>) -> mpsc::Receiver<ProbeResult> {
        let processor = ConcurrentProcessor::new(self.config.concurrency);
        tracing::debug!(
            count = targets.len(),
            concurrency = processor.max_concurrency(),
            "starting probe run"
        );
        processor.dispatch(Arc::clone(&self.transport), targets)
    }

    /// Probe every input URL and collect all results.
    pub async fn probe_all(&self, urls: &[String]) -> Vec<ProbeResult> {
        let mut rx = self.probe_urls(urls);
        let mut results = Vec::with_capacity(urls.len());
        while let Some(result) = rx.recv().await {
            results.push(result);
        }
        results
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }
}
