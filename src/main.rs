// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! pagerisk CLI - Heuristic Web Page Risk Scoring
//!
//! Scans live pages or saved page snapshots and manages local scanner state.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Context};
use url::Url;

use pagerisk::{
    extract_page_data, BlockList, HttpPageSource, Notification, PageData, ResultStore,
    ScanOutcome, ScanService, SettingsStore,
};

const HOME_ENV: &str = "PAGERISK_HOME";
const DEFAULT_HOME: &str = ".pagerisk";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pagerisk=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let outcome = match args[1].as_str() {
        "scan" => match args.get(2) {
            Some(url) => scan_url(url).await,
            None => usage_error("pagerisk scan <url>"),
        },
        "file" => match args.get(2) {
            Some(path) => scan_file(Path::new(path), option_value(&args[3..], "--url")).await,
            None => usage_error("pagerisk file <page.json|page.html> [--url <url>]"),
        },
        "settings" => manage_settings(&args[2..]),
        "block" => match args.get(2) {
            Some(domain) => block_domain(domain),
            None => usage_error("pagerisk block <domain>"),
        },
        "unblock" => match args.get(2) {
            Some(domain) => unblock_domain(domain),
            None => usage_error("pagerisk unblock <domain>"),
        },
        "history" => show_history(args.iter().any(|a| a == "--clear")),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(ExitCode::SUCCESS)
        }
        "--version" | "-v" | "version" => {
            println!("pagerisk {}", pagerisk::VERSION);
            Ok(ExitCode::SUCCESS)
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Ok(ExitCode::from(1))
        }
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"pagerisk - Heuristic Web Page Risk Scoring

USAGE:
    pagerisk <COMMAND> [OPTIONS]

COMMANDS:
    scan <url>                  Fetch a page and score it
    file <path> [--url <url>]   Score a saved page (JSON page data or HTML)
    settings [show]             Show current settings
    settings set <json>         Merge a JSON object into the settings
    settings reset              Restore default settings
    block <domain>              Never scan this hostname
    unblock <domain>            Remove a hostname from the blocklist
    history [--clear]           List stored scan results
    help                        Show this help message
    version                     Show version information

ENVIRONMENT:
    PAGERISK_HOME   State directory (default: ./.pagerisk)
    RUST_LOG        Log filter (default: pagerisk=info)

EXAMPLES:
    pagerisk scan https://example.com
    pagerisk scan "https://example.com/?deepScan=true"
    pagerisk file page.html --url https://login-portal.net/
    pagerisk settings set '{{"scanThreshold": "high"}}'
"#
    );
}

fn usage_error(usage: &str) -> anyhow::Result<ExitCode> {
    eprintln!("Usage: {}", usage);
    Ok(ExitCode::from(1))
}

fn option_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn state_dir() -> PathBuf {
    env::var_os(HOME_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_HOME))
}

fn open_settings() -> anyhow::Result<SettingsStore> {
    let path = state_dir().join("settings.json");
    SettingsStore::open(&path).with_context(|| format!("loading {}", path.display()))
}

fn open_results() -> anyhow::Result<ResultStore> {
    let path = state_dir().join("results.json");
    ResultStore::open(&path).with_context(|| format!("loading {}", path.display()))
}

fn open_blocklist() -> anyhow::Result<BlockList> {
    let path = state_dir().join("blocked.json");
    BlockList::open(&path).with_context(|| format!("loading {}", path.display()))
}

fn build_service() -> anyhow::Result<ScanService> {
    let source = HttpPageSource::new().context("creating HTTP client")?;

    Ok(ScanService::new(Arc::new(source))
        .settings(Arc::new(open_settings()?))
        .results(Arc::new(open_results()?))
        .blocklist(Arc::new(open_blocklist()?)))
}

async fn scan_url(url: &str) -> anyhow::Result<ExitCode> {
    println!("Scanning: {}", url);

    let service = build_service()?;
    let outcome = service.scan(url).await?;
    Ok(report(&outcome, url))
}

async fn scan_file(path: &Path, url: Option<&str>) -> anyhow::Result<ExitCode> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let page = if path.extension().map_or(false, |ext| ext == "json") {
        let mut page: PageData = serde_json::from_str(&raw).context("parsing page data")?;
        if let Some(url) = url {
            page.url = url.to_string();
        }
        if page.domain.is_empty() {
            page.domain = PageData::domain_from_url(&page.url).unwrap_or_default();
        }
        page
    } else {
        let url = match url {
            Some(url) => url.to_string(),
            None => file_url(path)?,
        };
        extract_page_data(&raw, &url)
    };

    println!("Scanning: {} ({})", path.display(), page.url);

    let service = build_service()?;
    let title = page.title.clone();
    let outcome = service.scan_page(page).await;
    Ok(report(&outcome, &title))
}

fn file_url(path: &Path) -> anyhow::Result<String> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("resolving {}", path.display()))?;
    match Url::from_file_path(&absolute) {
        Ok(url) => Ok(url.to_string()),
        Err(()) => bail!("cannot build a URL for {}", absolute.display()),
    }
}

fn report(outcome: &ScanOutcome, page_title: &str) -> ExitCode {
    let result = match outcome {
        ScanOutcome::Blocked { domain } => {
            println!("\n[BLOCKED] {} is on the blocklist", domain);
            return ExitCode::SUCCESS;
        }
        ScanOutcome::Cached { result, .. } => {
            println!("\n(cached result from {})", result.scan_time);
            result
        }
        ScanOutcome::Completed { result, .. } => result,
    };

    println!("\n=== Verdict ===");
    println!("Risk level: {}", result.risk_level.as_str().to_uppercase());
    println!("Risk score: {}/100", result.risk_score);
    if result.is_partial() {
        println!("Partial scan: page data was incomplete");
    }

    if !result.alerts.is_empty() {
        println!("\n=== Alerts ({}) ===", result.alerts.len());
        for alert in &result.alerts {
            println!("  [{}] {}", alert.alert_type.as_str(), alert.message);
            println!("    {}", alert.details);
        }
    }

    if outcome.should_notify() {
        let notification = Notification::for_result(result, page_title);
        println!("\n[!] {}", notification.title);
        println!("    {}", notification.message);
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

fn manage_settings(args: &[String]) -> anyhow::Result<ExitCode> {
    let store = open_settings()?;

    let settings = match args.first().map(String::as_str) {
        None | Some("show") => store.get(),
        Some("reset") => store.reset()?,
        Some("set") => {
            let Some(raw) = args.get(1) else {
                return usage_error("pagerisk settings set <json>");
            };
            let overrides: serde_json::Value =
                serde_json::from_str(raw).context("parsing settings JSON")?;
            store.update(&overrides)?
        }
        Some(other) => bail!("unknown settings action: {}", other),
    };

    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(ExitCode::SUCCESS)
}

fn block_domain(domain: &str) -> anyhow::Result<ExitCode> {
    if open_blocklist()?.block(domain)? {
        println!("Domain \"{}\" has been blocked", domain);
    } else {
        println!("Domain \"{}\" is already blocked", domain);
    }
    Ok(ExitCode::SUCCESS)
}

fn unblock_domain(domain: &str) -> anyhow::Result<ExitCode> {
    if open_blocklist()?.unblock(domain)? {
        println!("Domain \"{}\" has been unblocked", domain);
    } else {
        println!("Domain \"{}\" was not blocked", domain);
    }
    Ok(ExitCode::SUCCESS)
}

fn show_history(clear: bool) -> anyhow::Result<ExitCode> {
    let store = open_results()?;

    if clear {
        store.clear()?;
        println!("Scan history cleared");
        return Ok(ExitCode::SUCCESS);
    }

    let records = store.all();
    if records.is_empty() {
        println!("No stored scan results");
        return Ok(ExitCode::SUCCESS);
    }

    println!("=== Scan History ({}) ===", records.len());
    for (url, record) in &records {
        let result = record.result();
        println!(
            "  [{:>8}] {:>3}  {}  {}{}",
            result.risk_level.as_str(),
            result.risk_score,
            result.scan_time,
            url,
            if record.is_anonymized() { " (anonymized)" } else { "" }
        );
    }

    Ok(ExitCode::SUCCESS)
}
