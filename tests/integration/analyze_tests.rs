//! Integration tests for the analyzer
//!
//! These tests use wiremock to create mock HTTP servers and run full batches
//! through fetch, extraction, and JSON persistence.

use page_survey::analyzer::{build_http_client, Coordinator, Fetcher};
use page_survey::config::{Config, DEFAULT_USER_AGENT};
use page_survey::output::{encode_result, JsonFilePersister, Persister};
use page_survey::record::{AnalysisResult, PageRecord};
use page_survey::state::UrlState;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title> Sample Page </title>
    <meta name="description" content="A page used for testing">
    <meta property="og:title" content="Sample">
</head>
<body>
    <h1>Welcome</h1>
    <h2>Intro</h2>
    <a href="/about">About us</a>
    <a href="https://other.org/x">Elsewhere</a>
    <img src="/logo.png" alt="Logo">
</body>
</html>"#;

/// Builds a coordinator writing into `output_dir` with a short timeout and no pacing
fn test_coordinator(output_dir: &Path, timeout: Duration) -> Coordinator {
    let client = build_http_client(DEFAULT_USER_AGENT).expect("Failed to build client");
    let fetcher = Fetcher::with_client(client, timeout);
    let persister = JsonFilePersister::new(output_dir, "website_analysis");
    Coordinator::with_parts(fetcher, Box::new(persister), Duration::ZERO)
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn read_artifact(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("Failed to read artifact");
    serde_json::from_str(&content).expect("Artifact is not valid JSON")
}

#[tokio::test]
async fn test_full_analysis_single_page() {
    let server = MockServer::start().await;
    mount_page(&server, "/page", SAMPLE_PAGE).await;

    let output = TempDir::new().unwrap();
    let coordinator = test_coordinator(output.path(), Duration::from_secs(5));

    let url = format!("{}/page", server.uri());
    let report = coordinator.run(&[url.clone()]).await;

    assert_eq!(report.succeeded(), 1);
    let artifact = report.outcomes()[0].artifact.clone().expect("No artifact");
    let value = read_artifact(&artifact);

    assert_eq!(value["url"], url);
    assert_eq!(value["data"]["title"], "Sample Page");
    assert_eq!(value["data"]["description"], "A page used for testing");
    assert_eq!(value["data"]["headings"]["h1"][0], "Welcome");
    assert_eq!(value["data"]["headings"]["h3"], serde_json::json!([]));
    assert_eq!(
        value["data"]["links"][0]["url"],
        format!("{}/about", server.uri())
    );
    assert_eq!(value["data"]["links"][1]["url"], "https://other.org/x");
    assert_eq!(
        value["data"]["images"][0]["src"],
        format!("{}/logo.png", server.uri())
    );
    assert_eq!(value["data"]["meta_info"]["og:title"], "Sample");
}

#[tokio::test]
async fn test_artifact_named_after_host() {
    let server = MockServer::start().await;
    mount_page(&server, "/", SAMPLE_PAGE).await;

    let output = TempDir::new().unwrap();
    let coordinator = test_coordinator(output.path(), Duration::from_secs(5));
    let report = coordinator.run(&[server.uri()]).await;

    let netloc = url::Url::parse(&server.uri())
        .map(|u| format!("{}_{}", u.host_str().unwrap(), u.port().unwrap()))
        .unwrap()
        .replace('.', "_");
    let expected = output
        .path()
        .join(format!("website_analysis_{}.json", netloc));

    assert_eq!(report.outcomes()[0].artifact.as_ref(), Some(&expected));
    assert!(expected.exists());
}

#[tokio::test]
async fn test_timeout_in_middle_of_batch_is_isolated() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    let third = MockServer::start().await;

    mount_page(&first, "/", SAMPLE_PAGE).await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SAMPLE_PAGE)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&second)
        .await;
    mount_page(&third, "/", SAMPLE_PAGE).await;

    let output = TempDir::new().unwrap();
    let coordinator = test_coordinator(output.path(), Duration::from_millis(300));

    let urls = vec![first.uri(), second.uri(), third.uri()];
    let report = coordinator.run(&urls).await;

    assert_eq!(report.attempted(), 3);
    assert_eq!(report.outcomes()[0].state, UrlState::Persisted);
    assert_eq!(report.outcomes()[1].state, UrlState::FetchFailed);
    assert!(report.outcomes()[1].artifact.is_none());
    assert!(report.outcomes()[1]
        .error
        .as_deref()
        .unwrap()
        .contains("timeout"));
    assert_eq!(report.outcomes()[2].state, UrlState::Persisted);

    let artifacts = std::fs::read_dir(output.path()).unwrap().count();
    assert_eq!(artifacts, 2);
}

#[tokio::test]
async fn test_http_error_status_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let coordinator = test_coordinator(output.path(), Duration::from_secs(5));
    let report = coordinator.run(&[server.uri()]).await;

    assert_eq!(report.outcomes()[0].state, UrlState::FetchFailed);
    assert!(report.outcomes()[0]
        .error
        .as_deref()
        .unwrap()
        .contains("500"));
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_urls_processed_in_order() {
    let server = MockServer::start().await;
    for (route, title) in [("/a", "A"), ("/b", "B"), ("/c", "C")] {
        mount_page(
            &server,
            route,
            &format!("<html><head><title>{}</title></head></html>", title),
        )
        .await;
    }

    let output = TempDir::new().unwrap();
    let coordinator = test_coordinator(output.path(), Duration::from_secs(5));
    let urls: Vec<String> = ["/a", "/b", "/c"]
        .iter()
        .map(|route| format!("{}{}", server.uri(), route))
        .collect();
    let report = coordinator.run(&urls).await;

    let reported: Vec<&str> = report.outcomes().iter().map(|o| o.url.as_str()).collect();
    assert_eq!(reported, urls.iter().map(String::as_str).collect::<Vec<_>>());

    let requests = server.received_requests().await.unwrap();
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/a", "/b", "/c"]);

    // Same host: the last page wins the shared artifact
    let value = read_artifact(report.outcomes()[2].artifact.as_ref().unwrap());
    assert_eq!(value["data"]["title"], "C");
}

#[tokio::test]
async fn test_bounded_output_on_large_page() {
    let mut body = String::from("<html><head><title>Big</title>");
    for i in 0..20 {
        body.push_str(&format!(r#"<meta name="m{}" content="{}">"#, i, "v".repeat(150)));
    }
    body.push_str("</head><body>");
    for i in 0..20 {
        body.push_str(&format!("<h1>H{}</h1><h2>S{}</h2><h3>T{}</h3>", i, i, i));
        body.push_str(&format!(r#"<a href="/l{}">{}</a>"#, i, "t".repeat(70)));
        body.push_str(&format!(r#"<img src="i{}.png" alt="{}">"#, i, "a".repeat(40)));
    }
    body.push_str("</body></html>");

    let server = MockServer::start().await;
    mount_page(&server, "/big", &body).await;

    let output = TempDir::new().unwrap();
    let coordinator = test_coordinator(output.path(), Duration::from_secs(5));
    let report = coordinator.run(&[format!("{}/big", server.uri())]).await;

    let value = read_artifact(report.outcomes()[0].artifact.as_ref().unwrap());
    let data = &value["data"];

    for level in ["h1", "h2", "h3"] {
        assert_eq!(data["headings"][level].as_array().unwrap().len(), 5);
    }

    let links = data["links"].as_array().unwrap();
    assert_eq!(links.len(), 10);
    for link in links {
        assert_eq!(link["text"].as_str().unwrap().chars().count(), 50);
        assert!(link["url"].as_str().unwrap().starts_with("http://"));
    }

    let images = data["images"].as_array().unwrap();
    assert_eq!(images.len(), 5);
    for image in images {
        assert_eq!(image["alt"].as_str().unwrap().chars().count(), 30);
        assert!(url::Url::parse(image["src"].as_str().unwrap()).is_ok());
    }

    let meta = data["meta_info"].as_object().unwrap();
    assert_eq!(meta.len(), 10);
    for content in meta.values() {
        assert_eq!(content.as_str().unwrap().chars().count(), 100);
    }
}

#[test]
fn test_repersist_is_byte_identical() {
    let output = TempDir::new().unwrap();
    let persister = JsonFilePersister::new(output.path(), "website_analysis");

    let mut record = PageRecord::empty();
    record.title = "Stable".to_string();
    let result =
        AnalysisResult::with_timestamp("https://example.com/", "2026-10-16 09:30:00", record);

    let path = persister.persist(&result).unwrap();
    let first = std::fs::read(&path).unwrap();
    persister.persist(&result).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, encode_result(&result).unwrap().into_bytes());
}

#[test]
fn test_default_config_has_sample_urls() {
    let config = Config::default();
    assert!((2..=3).contains(&config.default_urls.len()));
    assert_eq!(config.fetcher.timeout_secs, 10);
    assert_eq!(config.pacing.delay_ms, 1000);
}
