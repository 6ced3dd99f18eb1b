//! Batch coordinator - drives every URL through the analysis pipeline
//!
//! URLs are processed strictly one after another in the order given. A failure
//! at any stage is reported and ends processing of that URL only; the batch
//! always moves on to the next one. Between URLs a fixed pacing delay is
//! inserted.

use crate::analyzer::extractor::extract;
use crate::analyzer::fetcher::Fetcher;
use crate::analyzer::parser::parse;
use crate::config::{validate, Config};
use crate::output::{format_preview, BatchReport, JsonFilePersister, Persister, UrlOutcome};
use crate::record::{AnalysisResult, PageRecord};
use crate::state::{UrlState, UrlTracker};
use crate::url::parse_target;
use crate::AnalyzerError;
use std::path::PathBuf;
use std::time::Duration;

/// Main batch coordinator structure
pub struct Coordinator {
    fetcher: Fetcher,
    persister: Box<dyn Persister>,
    pacing: Duration,
    show_preview: bool,
}

impl Coordinator {
    /// Creates a coordinator from configuration
    ///
    /// Artifacts go to a `JsonFilePersister` rooted at the configured output
    /// directory. An invalid configuration is rejected before any client is
    /// built.
    pub fn new(config: &Config) -> crate::Result<Self> {
        validate(config)?;

        let fetcher = Fetcher::new(&config.fetcher)?;
        let persister = JsonFilePersister::new(&config.output.directory, &config.output.prefix);

        Ok(Self::with_parts(
            fetcher,
            Box::new(persister),
            config.pacing.delay(),
        ))
    }

    /// Creates a coordinator from explicit parts
    pub fn with_parts(fetcher: Fetcher, persister: Box<dyn Persister>, pacing: Duration) -> Self {
        Self {
            fetcher,
            persister,
            pacing,
            show_preview: false,
        }
    }

    /// Prints a human-readable preview of every extracted record to stdout
    pub fn with_preview(mut self, show_preview: bool) -> Self {
        self.show_preview = show_preview;
        self
    }

    /// Runs the batch
    ///
    /// Every URL ends in a terminal state recorded in the returned report, in
    /// input order. No failure aborts the batch.
    pub async fn run(&self, urls: &[String]) -> BatchReport {
        tracing::info!("Starting batch of {} URL(s)", urls.len());

        let mut report = BatchReport::new();

        for (index, url) in urls.iter().enumerate() {
            if index > 0 && !self.pacing.is_zero() {
                tracing::debug!("Pacing {:?} before {}", self.pacing, url);
                tokio::time::sleep(self.pacing).await;
            }

            let outcome = self.process_url(url).await;
            report.push(outcome);
        }

        tracing::info!(
            "Batch complete: {} of {} URL(s) analyzed, {} failed",
            report.succeeded(),
            report.attempted(),
            report.failed()
        );

        report
    }

    /// Processes a single URL, converting any failure into a reported outcome
    async fn process_url(&self, url: &str) -> UrlOutcome {
        tracing::info!("Analyzing website: {}", url);
        if self.show_preview {
            println!("\nAnalyzing website: {}", url);
            println!("{}", "=".repeat(50));
        }

        let mut tracker = UrlTracker::new(url);

        match self.drive(&mut tracker).await {
            Ok(path) => {
                tracing::info!("Analysis of {} saved to {}", url, path.display());
                if self.show_preview {
                    println!("\nAnalysis saved to {}", path.display());
                }
                UrlOutcome::persisted(url, path)
            }
            Err(e) => {
                tracing::error!("Failed to analyze {} [{}]: {}", url, failure_kind(&e), e);
                if self.show_preview {
                    println!("Error analyzing {}: {}", url, e);
                }
                UrlOutcome::failed(url, tracker.state(), e.to_string())
            }
        }
    }

    /// Walks one URL through fetch, parse, extract, and persist
    async fn drive(&self, tracker: &mut UrlTracker) -> crate::Result<PathBuf> {
        tracker.advance(UrlState::Fetching)?;

        let fetched = match parse_target(tracker.url()) {
            Ok(target) => self
                .fetcher
                .fetch(&target)
                .await
                .map(|body| (target, body)),
            Err(e) => Err(e),
        };

        let (target, body) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                tracker.advance(UrlState::FetchFailed)?;
                return Err(e.into());
            }
        };
        tracker.advance(UrlState::Fetched)?;

        tracker.advance(UrlState::Extracting)?;
        let record = analyze_document(&body, &target);
        drop(body);
        tracker.advance(UrlState::Extracted)?;

        if self.show_preview {
            println!("{}", format_preview(&record));
        }

        let result = AnalysisResult::new(tracker.url(), record);

        tracker.advance(UrlState::Persisting)?;
        match self.persister.persist(&result) {
            Ok(path) => {
                tracker.advance(UrlState::Persisted)?;
                Ok(path)
            }
            Err(e) => {
                tracker.advance(UrlState::PersistFailed)?;
                Err(e.into())
            }
        }
    }
}

/// Parses and extracts in one scope so the document tree is released before
/// the next await point
fn analyze_document(body: &str, base_url: &url::Url) -> PageRecord {
    let tree = parse(body);
    extract(&tree, base_url)
}

fn failure_kind(error: &AnalyzerError) -> &'static str {
    match error {
        AnalyzerError::Fetch(e) => e.kind(),
        AnalyzerError::Persist(_) => "persist",
        AnalyzerError::InvalidTransition { .. } => "invalid_transition",
        _ => "other",
    }
}

/// Runs a batch with a coordinator built from `config`
///
/// # Example
///
/// ```no_run
/// use page_survey::config::Config;
/// use page_survey::analyzer::run_batch;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::default();
/// let report = run_batch(&config, &config.default_urls).await?;
/// println!("{} artifacts written", report.succeeded());
/// # Ok(())
/// # }
/// ```
pub async fn run_batch(config: &Config, urls: &[String]) -> crate::Result<BatchReport> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run(urls).await)
}
