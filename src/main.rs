//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sentinel_scan` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading URLs from arguments or stdin
//! - Printing the display text returned by the library
//!
//! All scanning logic is implemented in the library crate.

use std::io::BufRead;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use url::Url;

use sentinel_scan::config::DEFAULT_BASE_URL;
use sentinel_scan::initialization::init_logger_with;
use sentinel_scan::{render_outcome, Config, LogFormat, LogLevel, ScanClient};

/// Exit code when at least one URL did not produce a result.
const EXIT_SCAN_FAILED: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "sentinel_scan", version, about = "Check URLs against a remote risk-scanning service")]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Backend origin (scheme, host and optional port)
    #[arg(long, global = true, env = "SENTINEL_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    /// Per-request timeout in seconds (waits indefinitely when omitted)
    #[arg(long, global = true)]
    timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan one or more URLs (reads stdin when none are given or for "-")
    Scan {
        urls: Vec<String>,
    },
    /// Show the backend's status message
    Status,
}

impl GlobalOpts {
    fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            base_url: self.base_url,
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.global.into_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = match ScanClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("sentinel_scan error: {e:#}");
            process::exit(1);
        }
    };

    let code = match cli.command {
        Command::Scan { urls } => run_scans(&client, urls).await?,
        Command::Status => run_status(&client).await,
    };
    process::exit(code);
}

/// Scans each URL in order and prints one display block per URL.
async fn run_scans(client: &ScanClient, args: Vec<String>) -> Result<i32> {
    let stdin = std::io::stdin();
    let urls = collect_urls(args, stdin.lock()).context("Failed to read URLs from stdin")?;

    let mut local = 0usize;
    let mut remote = 0usize;
    for (i, url) in urls.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let outcome = client.try_scan(url).await;
        match &outcome {
            Err(e) if e.is_local() => local += 1,
            Err(_) => remote += 1,
            Ok(_) => {}
        }
        println!("{}", render_outcome(&outcome));
    }

    log::info!(
        "Scanned {} URL(s): {} rejected locally, {} failed at the backend",
        urls.len(),
        local,
        remote
    );
    Ok(exit_code(local + remote))
}

/// Expands the scan arguments into the list of URLs to scan.
///
/// With no arguments every URL comes from `reader`. Otherwise each `-` is
/// replaced in place by the lines of `reader`, which is read at most once; a
/// second `-` contributes nothing. Other arguments keep their order.
fn collect_urls(args: Vec<String>, reader: impl BufRead) -> std::io::Result<Vec<String>> {
    if args.is_empty() {
        return read_url_lines(reader);
    }

    let mut reader = Some(reader);
    let mut urls = Vec::with_capacity(args.len());
    for arg in args {
        if arg == "-" {
            if let Some(reader) = reader.take() {
                urls.extend(read_url_lines(reader)?);
            }
        } else {
            urls.push(arg);
        }
    }
    Ok(urls)
}

/// Exit code for a scan run: 0 when every URL produced a result.
fn exit_code(failed: usize) -> i32 {
    if failed > 0 {
        EXIT_SCAN_FAILED
    } else {
        0
    }
}

async fn run_status(client: &ScanClient) -> i32 {
    match client.service_status().await {
        Ok(status) => {
            println!("{}: {}", status.status, status.message);
            if let Some(usage) = status.usage {
                println!("usage: {usage}");
            }
            0
        }
        Err(e) => {
            println!("{e}");
            exit_code(1)
        }
    }
}

/// Reads one URL per line, skipping blank lines and `#` comments.
fn read_url_lines(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }
    Ok(urls)
}
