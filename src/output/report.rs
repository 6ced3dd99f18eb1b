//! Batch outcome reporting

use crate::state::UrlState;
use std::path::PathBuf;

/// Terminal outcome of one URL
#[derive(Debug, Clone)]
pub struct UrlOutcome {
    /// The URL as supplied
    pub url: String,

    /// Terminal state reached
    pub state: UrlState,

    /// Artifact written, if any
    pub artifact: Option<PathBuf>,

    /// Failure description, if any
    pub error: Option<String>,
}

impl UrlOutcome {
    pub fn persisted(url: impl Into<String>, artifact: PathBuf) -> Self {
        Self {
            url: url.into(),
            state: UrlState::Persisted,
            artifact: Some(artifact),
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, state: UrlState, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state,
            artifact: None,
            error: Some(error.into()),
        }
    }
}

/// Outcomes of a batch, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    outcomes: Vec<UrlOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of the next URL; `outcome.state` must be terminal
    pub fn push(&mut self, outcome: UrlOutcome) {
        debug_assert!(
            outcome.state.is_terminal(),
            "non-terminal outcome {} for {}",
            outcome.state,
            outcome.url
        );
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[UrlOutcome] {
        &self.outcomes
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.state.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.state.is_error()).count()
    }

    /// Paths of every artifact written, in input order
    pub fn artifacts(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| o.artifact.as_ref())
            .collect()
    }

    /// One-line summary for the operator
    pub fn summary_line(&self) -> String {
        format!(
            "{} of {} URL(s) analyzed, {} failed",
            self.succeeded(),
            self.attempted(),
            self.failed()
        )
    }

    /// Closing block printed after the batch: summary, artifact paths, reminders
    pub fn format_closing(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.summary_line()));
        let artifacts = self.artifacts();
        if !artifacts.is_empty() {
            output.push_str("Artifacts written:\n");
            for path in artifacts {
                output.push_str(&format!("  - {}\n", path.display()));
            }
        }

        output.push_str(&format!("\n{}\n", "=".repeat(50)));
        output.push_str("Page-Survey run completed!\n");
        output.push_str("Remember to always:\n");
        for reminder in CLOSING_REMINDERS {
            output.push_str(&format!("  - {}\n", reminder));
        }

        output
    }
}

const CLOSING_REMINDERS: [&str; 3] = [
    "Check robots.txt",
    "Respect rate limits",
    "Be ethical and legal",
];

/// Banner printed before anything else, including the interactive prompt
pub fn format_banner() -> String {
    format!(
        "Page-Survey\n{}\nRemember: always respect robots.txt and rate limits.",
        "=".repeat(30)
    )
}
