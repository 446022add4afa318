//! End-to-end pipeline tests against mock HTTP servers.
//!
//! Two servers stand in for the search engine and the competitor sites.
//! Competitor links use `localhost` while the engine endpoint uses
//! `127.0.0.1`, so the engine-domain filter sees two distinct hosts.

use std::fs;
use std::path::Path;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use serplens::{run, LensConfig};

struct Harness {
    _engine: MockServer,
    _sites: MockServer,
    config: LensConfig,
    _report_dir: tempfile::TempDir,
}

/// Engine serving a results page that links to two competitor pages on
/// the sites server (`/alpha` healthy, `/beta` erroring), plus a
/// duplicate link, a link back to the engine itself, and both widgets.
async fn harness() -> Harness {
    let engine = MockServer::start().await;
    let sites = MockServer::start().await;

    let sites_base = sites.uri().replace("127.0.0.1", "localhost");
    let serp = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>results</title></head>
<body>
<div id="search">
    <a href="{sites_base}/alpha">Alpha guide</a>
    <a href="/url?q={encoded_alpha}&amp;sa=U">Alpha again</a>
    <a href="{sites_base}/beta">Beta guide</a>
    <a href="{engine_base}/imghp">Engine images</a>
</div>
<div class="Xe4YD">rust scraping tutorial</div>
<div class="JCzEY tNxQIb">Is scraping hard?</div>
</body>
</html>"#,
        encoded_alpha = urlencoding::encode(&format!("{sites_base}/alpha")),
        engine_base = engine.uri(),
    );

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(serp))
        .mount(&engine)
        .await;

    Mock::given(method("GET"))
        .and(path("/alpha"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html>
<head>
    <title>Alpha Scraping Guide</title>
    <meta name="description" content="Scraping guide">
</head>
<body>
    <h1 class="hero">Scraping With Rust</h1>
    <p class="intro">Scraping pages takes care. Why throttle requests?</p>
</body>
</html>"#,
        ))
        .mount(&sites)
        .await;

    Mock::given(method("GET"))
        .and(path("/beta"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&sites)
        .await;

    let report_dir = tempfile::tempdir().expect("tempdir");
    let config = LensConfig {
        search_endpoint: format!("{}/search", engine.uri()),
        page_delay_seconds: 0,
        report_dir: report_dir.path().to_path_buf(),
        ..Default::default()
    };

    Harness {
        _engine: engine,
        _sites: sites,
        config,
        _report_dir: report_dir,
    }
}

fn read_report(dir: &Path, slug: &str, name: &str) -> String {
    let path = dir.join(slug).join(format!("{slug}_{name}.html"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[tokio::test]
async fn full_run_writes_reports_for_every_competitor() {
    let h = harness().await;
    let summary = run("rust scraping", &h.config).await.expect("run");

    // Duplicate and engine-host anchors collapse to two competitors.
    assert_eq!(summary.competitor_count, 2);
    // Eight search-scope tables plus six per competitor page.
    assert_eq!(summary.reports.len(), 8 + 2 * 6);
    assert!(summary.reports.iter().all(|p| p.exists()));
}

#[tokio::test]
async fn search_reports_capture_serp_signals() {
    let h = harness().await;
    run("rust scraping", &h.config).await.expect("run");

    let dir = &h.config.report_dir;
    let competitors = read_report(dir, "search-rust-scraping", "competitor_urls");
    assert!(competitors.contains("/alpha"));
    assert!(competitors.contains("/beta"));
    // First-seen order: alpha was linked before beta.
    let alpha_at = competitors.find("/alpha").expect("alpha row");
    let beta_at = competitors.find("/beta").expect("beta row");
    assert!(alpha_at < beta_at);

    let related = read_report(dir, "search-rust-scraping", "related_searches");
    assert!(related.contains("rust scraping tutorial"));

    let paa = read_report(dir, "search-rust-scraping", "people_also_asked");
    assert!(paa.contains("Is scraping hard?"));
}

#[tokio::test]
async fn healthy_page_reports_carry_extracted_signals() {
    let h = harness().await;
    run("rust scraping", &h.config).await.expect("run");

    let dir = &h.config.report_dir;
    let elements = read_report(dir, "localhost-alpha", "element_details");
    assert!(elements.contains("<td>h1</td>"));
    assert!(elements.contains("Scraping With Rust"));

    let questions = read_report(dir, "localhost-alpha", "questions");
    assert!(questions.contains("Why throttle requests?"));

    let meta = read_report(dir, "localhost-alpha", "meta_info");
    assert!(meta.contains("<td>description</td>"));
}

#[tokio::test]
async fn failed_competitor_still_gets_empty_reports() {
    let h = harness().await;
    run("rust scraping", &h.config).await.expect("run");

    let elements = read_report(&h.config.report_dir, "localhost-beta", "element_details");
    // Header row present, data rows absent.
    assert!(elements.contains("<th>Tag</th>"));
    assert!(elements.contains("<tbody>\n</tbody>"));
}

#[tokio::test]
async fn rerun_overwrites_reports_in_place() {
    let h = harness().await;
    let first = run("rust scraping", &h.config).await.expect("first run");
    let second = run("rust scraping", &h.config).await.expect("second run");

    assert_eq!(first.reports, second.reports);
    assert!(second.reports.iter().all(|p| p.exists()));
}
