use url::Url;

/// Character substituted for every non-alphanumeric character of a host
pub const HOST_SEPARATOR: char = '_';

/// Extracts the network location (host plus explicit port) from a URL
///
/// # Arguments
///
/// * `url` - The URL to extract the network location from
///
/// # Returns
///
/// * `Some(String)` - The lowercase host, followed by `:port` when the URL names one
/// * `None` - If the URL has no host
///
/// # Examples
///
/// ```
/// use url::Url;
/// use page_survey::url::extract_netloc;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(extract_netloc(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_netloc(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_netloc(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}

/// Replaces every character that is not ASCII alphanumeric with the separator
///
/// # Examples
///
/// ```
/// use page_survey::url::sanitize_host;
///
/// assert_eq!(sanitize_host("www.example.com"), "www_example_com");
/// assert_eq!(sanitize_host("127.0.0.1:8080"), "127_0_0_1_8080");
/// ```
pub fn sanitize_host(host: &str) -> String {
    host.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                HOST_SEPARATOR
            }
        })
        .collect()
}
