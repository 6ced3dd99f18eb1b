//! Page-Survey main entry point
//!
//! This is the command-line interface for the Page-Survey page analyzer.

use anyhow::Context;
use clap::Parser;
use page_survey::analyzer::Coordinator;
use page_survey::config::{load_config, validate, Config};
use page_survey::output::format_banner;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Survey: a polite single-page structure analyzer
///
/// Fetches each URL once, extracts its title, description, headings, links,
/// images, and meta tags, and saves the summary as one JSON file per host.
/// With no URL, a built-in set of demonstration URLs is analyzed.
#[derive(Parser, Debug)]
#[command(name = "page-survey")]
#[command(version = "1.0.0")]
#[command(about = "A polite single-page structure analyzer", long_about = None)]
struct Cli {
    /// URLs to analyze, in order
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Prompt for a URL on stdin
    #[arg(short, long, conflicts_with = "urls")]
    interactive: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Directory for the JSON artifacts
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Delay between consecutive URLs in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the configuration and URLs that would be analyzed, without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if !cli.quiet && !cli.dry_run {
        println!("{}", format_banner());
    }

    let urls = if cli.interactive {
        prompt_for_urls(&config)?
    } else if cli.urls.is_empty() {
        config.default_urls.clone()
    } else {
        cli.urls.clone()
    };

    if cli.dry_run {
        handle_dry_run(&config, &urls);
        return Ok(());
    }

    handle_batch(&config, &urls, !cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_survey=warn"),
            1 => EnvFilter::new("page_survey=info,warn"),
            2 => EnvFilter::new("page_survey=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, if any, and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(timeout) = cli.timeout {
        config.fetcher.timeout_secs = timeout;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.pacing.delay_ms = delay_ms;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Asks the operator for one URL; an empty answer selects the default set
fn prompt_for_urls(config: &Config) -> anyhow::Result<Vec<String>> {
    print!("\nEnter a URL to analyze (or press Enter for examples): ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        println!("\nUsing example URLs for demonstration:");
        Ok(config.default_urls.clone())
    } else {
        Ok(vec![answer.to_string()])
    }
}

/// Handles the --dry-run mode: shows what would be analyzed
fn handle_dry_run(config: &Config, urls: &[String]) {
    println!("=== Page-Survey Dry Run ===\n");

    println!("Fetcher:");
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  User agent: {}", config.fetcher.user_agent);

    println!("\nOutput:");
    println!("  Directory: {}", config.output.directory.display());
    println!("  Prefix: {}", config.output.prefix);

    println!("\nPacing: {}ms between URLs", config.pacing.delay_ms);

    println!("\nURLs ({}):", urls.len());
    for url in urls {
        println!("  - {}", url);
    }
}

/// Handles the main batch operation
async fn handle_batch(config: &Config, urls: &[String], show_output: bool) -> anyhow::Result<()> {
    let coordinator = Coordinator::new(config)
        .context("Failed to set up the analyzer")?
        .with_preview(show_output);

    let report = coordinator.run(urls).await;

    if show_output {
        print!("\n{}", report.format_closing());
    }

    Ok(())
}
