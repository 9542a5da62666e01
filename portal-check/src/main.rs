//! Portal Check CLI Application
//!
//! Reads a file of URLs, derives a domain label from each, and probes the
//! matching Atlassian service desk login page. Hits are printed as they
//! arrive; totals are printed at the end and every result is appended to
//! `url_checker.log`.

mod ui;

use clap::Parser;
use portal_check_lib::{
    read_urls_from_file, PortalChecker, ProbeConfig, ProbeError, ProbeLog, Reporter,
    StatusCategory, Tally,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// CLI arguments for portal-check
#[derive(Parser, Debug)]
#[command(name = "portal-check")]
#[command(about = "Probe Atlassian service desk login pages for a list of URLs")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// File with one URL per line (blank lines are skipped)
    #[arg(value_name = "URL_FILE")]
    pub file: PathBuf,
}

/// What to do with the command line.
#[derive(Debug)]
enum Invocation {
    Run(Args),
    /// Anything but exactly one argument: print usage and exit 1
    Usage,
}

/// Accept exactly one argument after the program name and treat it as the
/// path, whatever it looks like (`--`, `-urls.txt`, `--help`).
fn parse_invocation<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let [program, file] = argv.as_slice() else {
        return Invocation::Usage;
    };

    // The escape makes clap take `file` verbatim as the positional. Only an
    // empty path is rejected by the value parser; it is still one argument.
    let escaped = [program.clone(), OsString::from("--"), file.clone()];
    let args = Args::try_parse_from(escaped).unwrap_or_else(|_| Args {
        file: PathBuf::from(file),
    });
    Invocation::Run(args)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    ui::print_banner();

    let args = match parse_invocation(std::env::args_os()) {
        Invocation::Run(args) => args,
        Invocation::Usage => {
            println!("{}", ui::format_usage());
            process::exit(1);
        }
    };

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

/// Probe every URL in the input file and report as results arrive.
async fn run(args: Args) -> Result<Tally, ProbeError> {
    let config = ProbeConfig::default();

    let urls = read_urls_from_file(&args.file)?;
    let log = ProbeLog::open(&config.log_path)?;
    let checker = PortalChecker::with_config(config)?;

    tracing::info!(
        file = %args.file.display(),
        count = urls.len(),
        "probing login pages"
    );

    let mut reporter = Reporter::new(log, urls.len());
    let mut results = checker.probe_urls(&urls);

    // Process results as they complete
    while let Some(result) = results.recv().await {
        if reporter.record(&result) == StatusCategory::Found {
            ui::print_found(&result);
        }
    }

    let (tally, _) = reporter.finish();
    ui::print_summary(&tally);

    Ok(tally)
}
