//! JSON artifact persister
//!
//! Each analyzed host gets one file, `<prefix>_<sanitized host>.json`, in the
//! output directory. The document holds the requested URL, the capture time,
//! and the full page record, pretty-printed with two-space indentation.

use crate::output::traits::Persister;
use crate::record::AnalysisResult;
use crate::url::{extract_netloc, sanitize_host};
use crate::{PersistError, PersistResult};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Extension of every artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// Writes analysis results as JSON files, one per host
#[derive(Debug, Clone)]
pub struct JsonFilePersister {
    directory: PathBuf,
    prefix: String,
}

impl JsonFilePersister {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
        }
    }

    /// Returns the artifact path for a requested URL
    ///
    /// # Example
    ///
    /// ```
    /// use page_survey::output::JsonFilePersister;
    /// use std::path::PathBuf;
    ///
    /// let persister = JsonFilePersister::new("out", "website_analysis");
    /// assert_eq!(
    ///     persister.artifact_path("https://www.example.com/about").unwrap(),
    ///     PathBuf::from("out/website_analysis_www_example_com.json")
    /// );
    /// ```
    pub fn artifact_path(&self, url: &str) -> PersistResult<PathBuf> {
        let parsed = Url::parse(url).map_err(|_| PersistError::MissingHost(url.to_string()))?;
        let netloc =
            extract_netloc(&parsed).ok_or_else(|| PersistError::MissingHost(url.to_string()))?;

        let file_name = format!(
            "{}_{}.{}",
            self.prefix,
            sanitize_host(&netloc),
            ARTIFACT_EXTENSION
        );
        Ok(self.directory.join(file_name))
    }
}

/// Encodes a result exactly as it is written to disk
pub fn encode_result(result: &AnalysisResult) -> PersistResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

impl Persister for JsonFilePersister {
    fn persist(&self, result: &AnalysisResult) -> PersistResult<PathBuf> {
        let path = self.artifact_path(&result.url)?;
        let content = encode_result(result)?;

        fs::create_dir_all(&self.directory)?;
        write_replacing(&path, content.as_bytes())?;

        tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}

/// Writes through a temporary sibling file and renames it over `path`
///
/// A failed write removes the temporary file and leaves any previous artifact
/// untouched.
fn write_replacing(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let tmp_path = path.with_extension(format!("{}.tmp", ARTIFACT_EXTENSION));

    let written = fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}
