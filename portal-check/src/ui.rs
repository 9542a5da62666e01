//! Console display logic for portal-check.
//!
//! Colored banner, per-hit lines and the end-of-run summary. Uses only the
//! `console` crate, which drops styling when stdout is not an ANSI terminal.

use console::style;
use portal_check_lib::{ProbeResult, StatusCategory, Tally};

/// Banner shown at startup.
pub fn format_banner() -> String {
    format!(
        "\n{}\n",
        style("Welcome to the Jira Service Desk Portal Checker").blue()
    )
}

pub fn print_banner() {
    println!("{}", format_banner());
}

/// Usage line printed on a bad invocation.
pub fn format_usage() -> String {
    format!("Usage: {} <url_file>", env!("CARGO_PKG_NAME"))
}

/// Line printed as soon as a probe returns 200.
pub fn format_found(result: &ProbeResult) -> String {
    style(format!("{}: {}", result.domain, StatusCategory::Found))
        .green()
        .to_string()
}

pub fn print_found(result: &ProbeResult) {
    println!("{}", format_found(result));
}

// ── Summary ──────────────────────────────────────────────────────────────────

/// Format the end-of-run summary block.
pub fn format_summary(tally: &Tally) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        style("Result").blue().to_string(),
        style(format!("Total URLs: {}", tally.total)).blue().to_string(),
        style(format!("Total 200 Responses: {}", tally.count_200))
            .green()
            .to_string(),
        style(format!("Total 404 Responses: {}", tally.count_404))
            .red()
            .to_string(),
        style(format!("Total 403 Responses: {}", tally.count_403))
            .red()
            .to_string(),
    ];

    if !tally.successful_urls.is_empty() {
        lines.push(String::new());
        lines.push(style("URLs with 200 Status:").green().to_string());
        for url in &tally.successful_urls {
            lines.push(style(url).green().to_string());
        }
    }

    lines
}

pub fn print_summary(tally: &Tally) {
    for line in format_summary(tally) {
        println!("{}", line);
    }
}
