//! State tracking for a single URL

use crate::state::UrlState;
use crate::AnalyzerError;

/// Walks one URL through the state machine, rejecting illegal transitions
#[derive(Debug, Clone)]
pub struct UrlTracker {
    url: String,
    state: UrlState,
}

impl UrlTracker {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: UrlState::Pending,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn state(&self) -> UrlState {
        self.state
    }

    /// Moves to `next`, or returns `InvalidTransition` leaving the state unchanged
    pub fn advance(&mut self, next: UrlState) -> crate::Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(AnalyzerError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }

        tracing::trace!("{}: {} -> {}", self.url, self.state, next);
        self.state = next;
        Ok(())
    }
}
