//! Utility functions for input parsing and probe URL construction.
//!
//! This module contains the domain label heuristic, the login URL template
//! and reading of the URL list file.

use crate::error::ProbeError;
use crate::types::ProbeTarget;
use std::fs;
use std::path::Path;

const PORTAL_HOST_SUFFIX: &str = "atlassian.net";
const PORTAL_LOGIN_PATH: &str = "/servicedesk/customer/user/login";

/// Extract the domain label from a full URL, ignoring subdomains like `www`.
///
/// Hosts with more than two labels yield the second-to-last label, otherwise
/// the first label is returned. No public suffix rules are applied, so
/// `id.example.co.uk` yields `co`. Input without a parseable host yields an
/// empty string.
///
/// # Example
///
/// ```rust
/// use portal_check_lib::extract_domain;
///
/// assert_eq!(extract_domain("https://www.example.com/about"), "example");
/// assert_eq!(extract_domain("https://example.com"), "example");
/// ```
pub fn extract_domain(full_url: &str) -> String {
    let host = url::Url::parse(full_url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .unwrap_or_default();

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 {
        labels[labels.len() - 2].to_string()
    } else {
        labels[0].to_string()
    }
}

/// Build the service desk login URL for a domain label.
///
/// The label is not validated; an unusable hostname fails later at probe time.
pub fn build_probe_url(domain: &str) -> String {
    format!("https://{}.{}{}", domain, PORTAL_HOST_SUFFIX, PORTAL_LOGIN_PATH)
}

/// Map every input URL to a probe target, keeping order and duplicates.
pub fn build_targets(urls: &[String]) -> Vec<ProbeTarget> {
    urls.iter()
        .map(|input| {
            let domain = extract_domain(input);
            let url = build_probe_url(&domain);
            ProbeTarget { domain, url }
        })
        .collect()
}

/// Split a URL list into trimmed, non-blank lines.
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the URL list file.
///
/// # Errors
///
/// Returns `ProbeError::FileError` if the file is missing or not valid UTF-8.
pub fn read_urls_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ProbeError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ProbeError::file_error(path.to_string_lossy(), e.to_string()))?;
    Ok(parse_url_list(&content))
}
