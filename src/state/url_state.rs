/// Per-URL processing state definitions
///
/// Each URL of a batch walks this state machine once. No transition is
/// retried; every failure state is terminal for its URL only.
use std::fmt;

/// Represents the current state of one URL in a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlState {
    // ===== Active States =====
    /// URL is waiting for its turn in the batch
    Pending,

    /// Page request is in flight
    Fetching,

    /// Page body was received
    Fetched,

    /// Document is being parsed and summarized
    Extracting,

    /// Page record is complete
    Extracted,

    /// Artifact is being written
    Persisting,

    // ===== Terminal States =====
    /// Fetch failed (invalid URL, network, timeout, or HTTP status)
    FetchFailed,

    /// Artifact could not be written
    PersistFailed,

    /// Artifact was written
    Persisted,
}

impl UrlState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed | Self::PersistFailed | Self::Persisted
        )
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Persisted)
    }

    /// Returns true if this represents a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::PersistFailed)
    }

    /// Returns true if the state machine allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: UrlState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fetching)
                | (Self::Fetching, Self::FetchFailed)
                | (Self::Fetching, Self::Fetched)
                | (Self::Fetched, Self::Extracting)
                | (Self::Extracting, Self::Extracted)
                | (Self::Extracted, Self::Persisting)
                | (Self::Persisting, Self::PersistFailed)
                | (Self::Persisting, Self::Persisted)
        )
    }

    /// Converts the state to its report string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Fetched => "fetched",
            Self::Extracting => "extracting",
            Self::Extracted => "extracted",
            Self::Persisting => "persisting",
            Self::FetchFailed => "fetch_failed",
            Self::PersistFailed => "persist_failed",
            Self::Persisted => "persisted",
        }
    }

    /// Returns all possible states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::Fetching,
            Self::Fetched,
            Self::Extracting,
            Self::Extracted,
            Self::Persisting,
            Self::FetchFailed,
            Self::PersistFailed,
            Self::Persisted,
        ]
    }
}

impl fmt::Display for UrlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
