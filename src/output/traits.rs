//! Persister trait
//!
//! A persister turns one `AnalysisResult` into a durable artifact and reports
//! where it went. Write failures are returned to the caller, which decides how
//! to report them; they never affect other URLs.

use crate::record::AnalysisResult;
use crate::PersistResult;
use std::path::PathBuf;
use std::sync::Arc;

/// Trait for artifact writers
///
/// Implementations must be thread-safe.
pub trait Persister: Send + Sync {
    /// Writes the result, replacing any earlier artifact with the same name
    ///
    /// # Returns
    ///
    /// The path of the written artifact
    fn persist(&self, result: &AnalysisResult) -> PersistResult<PathBuf>;
}

impl<P: Persister + ?Sized> Persister for Arc<P> {
    fn persist(&self, result: &AnalysisResult) -> PersistResult<PathBuf> {
        (**self).persist(result)
    }
}
