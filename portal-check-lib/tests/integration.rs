// portal-check-lib/tests/integration.rs

//! Integration tests for probing runs against fake transports

use async_trait::async_trait;
use portal_check_lib::{
    parse_url_list, PortalChecker, ProbeConfig, ProbeError, ProbeLog, Reporter, Tally, Transport,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Counts concurrent calls and records every URL it was asked for.
#[derive(Default)]
struct InstrumentedTransport {
    active: AtomicUsize,
    peak: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl Transport for InstrumentedTransport {
    async fn get_status(&self, url: &str) -> Result<u16, ProbeError> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.seen.lock().unwrap().push(url.to_string());

        tokio::time::sleep(Duration::from_millis(20)).await;

        self.active.fetch_sub(1, Ordering::SeqCst);
        if url.contains("://fail") {
            Err(ProbeError::transport(url, "dns error"))
        } else {
            Ok(404)
        }
    }
}

/// Answers from a fixed table keyed by domain label.
struct TableTransport {
    statuses: HashMap<&'static str, Result<u16, ProbeError>>,
}

#[async_trait]
impl Transport for TableTransport {
    async fn get_status(&self, url: &str) -> Result<u16, ProbeError> {
        let domain = url
            .trim_start_matches("https://")
            .split('.')
            .next()
            .unwrap_or_default();
        self.statuses
            .get(domain)
            .cloned()
            .unwrap_or(Ok(500))
    }
}

fn table_transport() -> Arc<TableTransport> {
    let mut statuses = HashMap::new();
    statuses.insert("alpha", Ok(200));
    statuses.insert("bravo", Ok(404));
    statuses.insert("charlie", Ok(403));
    statuses.insert("delta", Ok(503));
    statuses.insert("echo", Err(ProbeError::transport("echo", "connection refused")));
    Arc::new(TableTransport { statuses })
}

fn urls(hosts: &[&str]) -> Vec<String> {
    hosts.iter().map(|h| format!("https://www.{}.com/", h)).collect()
}

async fn run(checker: &PortalChecker, urls: &[String]) -> (Tally, String) {
    let mut reporter = Reporter::new(ProbeLog::new(Vec::new()), urls.len());
    let mut results = checker.probe_urls(urls);
    while let Some(result) = results.recv().await {
        reporter.record(&result);
    }
    let (tally, log) = reporter.finish();
    (tally, String::from_utf8(log).unwrap())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_ceiling_is_respected() {
    let transport = Arc::new(InstrumentedTransport::default());
    let checker = PortalChecker::with_transport(ProbeConfig::default(), transport.clone());

    let hosts: Vec<String> = (0..45).map(|i| format!("site{}", i)).collect();
    let host_refs: Vec<&str> = hosts.iter().map(String::as_str).collect();
    let results = checker.probe_all(&urls(&host_refs)).await;

    assert_eq!(results.len(), 45);
    let peak = transport.peak.load(Ordering::SeqCst);
    assert!(peak <= 10, "peak concurrency was {}", peak);
    assert!(peak > 1, "probes did not overlap");
}

#[tokio::test]
async fn test_no_result_lost_when_probes_fail() {
    let transport = Arc::new(InstrumentedTransport::default());
    let checker = PortalChecker::with_transport(ProbeConfig::default(), transport.clone());

    let input = vec![
        "https://fail.io".to_string(),
        "https://www.ok.com".to_string(),
        "https://fail.io".to_string(),
        "https://api.ok.com".to_string(),
        "https://fail.io".to_string(),
    ];
    let results = checker.probe_all(&input).await;

    assert_eq!(results.len(), 5);
    assert_eq!(results.iter().filter(|r| r.outcome.is_err()).count(), 3);
    assert_eq!(transport.seen.lock().unwrap().len(), 5);
}

#[tokio::test]
async fn test_reporter_tally_over_mixed_statuses() {
    let checker = PortalChecker::with_transport(ProbeConfig::default(), table_transport());
    let (tally, log) = run(&checker, &urls(&["alpha", "bravo", "charlie", "delta", "echo"])).await;

    assert_eq!(tally.total, 5);
    assert_eq!(tally.count_200, 1);
    assert_eq!(tally.count_404, 1);
    assert_eq!(tally.count_403, 1);
    assert_eq!(
        tally.successful_urls,
        vec!["https://alpha.atlassian.net/servicedesk/customer/user/login"]
    );

    assert_eq!(log.lines().count(), 5);
    assert!(log
        .lines()
        .any(|l| l.contains(" - ERROR - ") && l.contains("echo.atlassian.net")));
    assert!(log.lines().any(|l| l.ends_with("delta.atlassian.net/servicedesk/customer/user/login: 503")));
}

#[tokio::test]
async fn test_blank_lines_are_not_probed() {
    let transport = Arc::new(InstrumentedTransport::default());
    let checker = PortalChecker::with_transport(ProbeConfig::default(), transport.clone());

    let input = parse_url_list("https://a.com\n\nhttps://www.b.com\nhttps://c.d.org\n");
    assert_eq!(input.len(), 3);

    let results = checker.probe_all(&input).await;
    assert_eq!(results.len(), 3);

    let mut seen = transport.seen.lock().unwrap().clone();
    seen.sort();
    assert_eq!(
        seen,
        vec![
            "https://a.atlassian.net/servicedesk/customer/user/login",
            "https://b.atlassian.net/servicedesk/customer/user/login",
            "https://d.atlassian.net/servicedesk/customer/user/login",
        ]
    );
}

#[tokio::test]
async fn test_repeated_runs_give_identical_tallies() {
    let checker = PortalChecker::with_transport(ProbeConfig::default(), table_transport());
    let input = urls(&[
        "alpha", "bravo", "alpha", "charlie", "delta", "echo", "bravo", "alpha",
    ]);

    let (first, _) = run(&checker, &input).await;
    let (second, _) = run(&checker, &input).await;

    assert_eq!(first.total, second.total);
    assert_eq!(first.count_200, 3);
    assert_eq!(first.count_200, second.count_200);
    assert_eq!(first.count_404, second.count_404);
    assert_eq!(first.count_403, second.count_403);
    assert_eq!(
        first.successful_urls.len(),
        second.successful_urls.len()
    );
}

#[test]
fn test_tally_serializes_for_export() {
    let tally = Tally {
        total: 2,
        count_200: 1,
        count_404: 1,
        count_403: 0,
        successful_urls: vec!["https://a.atlassian.net/servicedesk/customer/user/login".to_string()],
    };
    let json = serde_json::to_value(&tally).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["count_200"], 1);
    assert_eq!(json["successful_urls"][0], "https://a.atlassian.net/servicedesk/customer/user/login");
}
