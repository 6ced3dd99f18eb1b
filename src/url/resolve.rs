use crate::FetchError;
use url::Url;

/// Parses an operator-supplied target into an absolute http(s) URL
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(FetchError::InvalidUrl)` - The input is not an absolute http(s) URL
pub fn parse_target(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    if url.host_str().is_none() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

/// Resolves a reference found in a document against the document's base URL
///
/// Relative references become absolute; absolute references pass through
/// unchanged. An empty reference points at the base itself. Returns `None`
/// only for references that cannot be joined.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use page_survey::url::resolve_reference;
///
/// let base = Url::parse("https://example.com/page").unwrap();
/// assert_eq!(
///     resolve_reference(&base, "/about"),
///     Some("https://example.com/about".to_string())
/// );
/// ```
pub fn resolve_reference(base: &Url, reference: &str) -> Option<String> {
    base.join(reference.trim()).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[test]
    fn test_resolve_root_relative() {
        assert_eq!(
            resolve_reference(&base_url(), "/about"),
            Some("https://example.com/about".to_string())
        );
    }

    #[test]
    fn test_resolve_path_relative() {
        let base = Url::parse("https://example.com/docs/intro").unwrap();
        assert_eq!(
            resolve_reference(&base, "setup"),
            Some("https://example.com/docs/setup".to_string())
        );
    }

    #[test]
    fn test_absolute_passes_through() {
        assert_eq!(
            resolve_reference(&base_url(), "https://other.org/x"),
            Some("https://other.org/x".to_string())
        );
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            resolve_reference(&base_url(), "//cdn.example.net/a.png"),
            Some("https://cdn.example.net/a.png".to_string())
        );
    }

    #[test]
    fn test_fragment_reference() {
        assert_eq!(
            resolve_reference(&base_url(), "#top"),
            Some("https://example.com/page#top".to_string())
        );
    }

    #[test]
    fn test_empty_reference_resolves_to_base() {
        assert_eq!(
            resolve_reference(&base_url(), "   "),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn test_unjoinable_reference() {
        assert_eq!(resolve_reference(&base_url(), "http://[invalid"), None);
    }

    #[test]
    fn test_parse_target_accepts_http() {
        let url = parse_target(" https://example.com ").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_target_rejects_relative() {
        let err = parse_target("example.com/page").unwrap_err();
        assert_eq!(err.kind(), "invalid_url");
    }

    #[test]
    fn test_parse_target_rejects_other_schemes() {
        assert!(parse_target("ftp://example.com/file").is_err());
        assert!(parse_target("mailto:someone@example.com").is_err());
    }
}
