//! # Portal Check Library
//!
//! Probes Atlassian service desk login pages derived from a list of URLs.
//!
//! Each input URL is reduced to a domain label, turned into a login page URL
//! and fetched with a single HTTP GET. Probes run concurrently under a fixed
//! ceiling and results are consumed in completion order by a `Reporter`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portal_check_lib::{PortalChecker, ProbeLog, Reporter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let urls = vec!["https://www.example.com".to_string()];
//!     let checker = PortalChecker::new()?;
//!     let mut reporter = Reporter::new(ProbeLog::open("url_checker.log")?, urls.len());
//!
//!     let mut results = checker.probe_urls(&urls);
//!     while let Some(result) = results.recv().await {
//!         reporter.record(&result);
//!     }
//!     println!("{:?}", reporter.tally());
//!     Ok(())
//! }
//! ```

// Re-export main public API types and functions
// This makes them available as portal_check_lib::TypeName
pub use checker::PortalChecker;
pub use concurrent::ConcurrentProcessor;
pub use error::{ProbeError, FILE_ERROR_EXIT_CODE};
pub use protocols::{HttpTransport, Transport};
pub use report::{LogLevel, ProbeLog, Reporter, Tally};
pub use types::{
    ProbeConfig, ProbeResult, ProbeTarget, StatusCategory, DEFAULT_CONCURRENCY, DEFAULT_LOG_PATH,
};
pub use utils::{build_probe_url, build_targets, extract_domain, parse_url_list, read_urls_from_file};

// Internal modules - these are not part of the public API
mod checker;
mod concurrent;
mod error;
mod protocols;
mod report;
mod types;
mod utils;
