//! End-to-end tests for the pagination scrape
//!
//! These tests use wiremock to stand in for the quotes site and
//! tempfile-backed SQLite databases for the sink.

use quotegrab::config::{Config, ScrapeConfig};
use quotegrab::scrape::{build_http_client, get_quotes, run_scrape};
use quotegrab::storage::{open_storage, persist_quotes, Storage};
use quotegrab::ScrapeError;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Renders one quote block in the site's markup shape
fn quote_block(text: &str, author: &str, tags: &[&str]) -> String {
    let tag_markup: String = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{}/">{}</a>"#, t, t))
        .collect();
    format!(
        r#"<div class="quote">
            <span class="text">{}</span>
            <small class="author">{}</small>
            <div class="tags">{}</div>
        </div>"#,
        text, author, tag_markup
    )
}

/// Renders a full page, optionally with a pager next-link
fn page_html(quotes: &[String], next_href: Option<&str>) -> String {
    let pager = match next_href {
        Some(href) => format!(
            r#"<ul class="pager"><li class="next"><a href="{}">Next</a></li></ul>"#,
            href
        ),
        None => String::new(),
    };
    format!(
        "<html><head><title>Quotes</title></head><body>{}{}</body></html>",
        quotes.concat(),
        pager
    )
}

/// Mounts two pages: page 1 with two quotes and a next-link, page 2 with
/// one quote and no pager. Each page expects exactly one fetch.
async fn mount_two_page_site(server: &MockServer) {
    let page1 = page_html(
        &[
            quote_block("The first quote.", "Alpha", &["one", "first"]),
            quote_block("The second quote.", "Beta", &[]),
        ],
        Some("/page/2/"),
    );
    let page2 = page_html(&[quote_block("The third quote.", "Gamma", &["last"])], None);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_two_page_scrape_returns_all_quotes_in_order() {
    let mock_server = MockServer::start().await;
    let origin = Url::parse(&mock_server.uri()).expect("Failed to parse mock URI");

    mount_two_page_site(&mock_server).await;

    let client = build_http_client("quotegrab-test/1.0").expect("Failed to build client");
    let start_url = format!("{}/", mock_server.uri());

    let quotes = get_quotes(&client, &start_url, &origin)
        .await
        .expect("Scrape failed");

    // Exactly 3 records in [page1-record1, page1-record2, page2-record1] order
    assert_eq!(quotes.len(), 3);
    assert_eq!(quotes[0].text, "The first quote.");
    assert_eq!(quotes[0].author, "Alpha");
    assert_eq!(quotes[0].tags, vec!["one".to_string(), "first".to_string()]);
    assert_eq!(quotes[1].text, "The second quote.");
    assert_eq!(quotes[1].tags, Vec::<String>::new());
    assert_eq!(quotes[2].text, "The third quote.");
    assert_eq!(quotes[2].author, "Gamma");

    // The expect(1) mocks verify exactly 2 fetches when the server drops.
}

#[tokio::test]
async fn test_single_page_site_fetches_once() {
    let mock_server = MockServer::start().await;
    let origin = Url::parse(&mock_server.uri()).expect("Failed to parse mock URI");

    let only_page = page_html(&[quote_block("Alone.", "Solo", &[])], None);
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(only_page))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client("quotegrab-test/1.0").expect("Failed to build client");
    let start_url = format!("{}/", mock_server.uri());

    let quotes = get_quotes(&client, &start_url, &origin)
        .await
        .expect("Scrape failed");

    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].author, "Solo");
}

#[tokio::test]
async fn test_failed_second_page_aborts_whole_scrape() {
    let mock_server = MockServer::start().await;
    let origin = Url::parse(&mock_server.uri()).expect("Failed to parse mock URI");

    let page1 = page_html(
        &[quote_block("Survives page one.", "Alpha", &[])],
        Some("/page/2/"),
    );
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2 fails; page 1's records must not leak out.
    Mock::given(method("GET"))
        .and(path("/page/2/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client("quotegrab-test/1.0").expect("Failed to build client");
    let start_url = format!("{}/", mock_server.uri());

    let result = get_quotes(&client, &start_url, &origin).await;

    match result {
        Err(ScrapeError::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_run_scrape_uses_configured_start_and_origin() {
    let mock_server = MockServer::start().await;

    mount_two_page_site(&mock_server).await;

    let config = Config {
        data_source: "./unused.db".to_string(),
        scrape: ScrapeConfig {
            start_url: format!("{}/", mock_server.uri()),
            site_origin: mock_server.uri(),
            user_agent: "quotegrab-test/1.0".to_string(),
        },
    };

    let quotes = run_scrape(&config).await.expect("Scrape failed");
    assert_eq!(quotes.len(), 3);
}

#[tokio::test]
async fn test_scrape_then_persist_end_to_end() {
    let mock_server = MockServer::start().await;
    let origin = Url::parse(&mock_server.uri()).expect("Failed to parse mock URI");

    mount_two_page_site(&mock_server).await;

    let client = build_http_client("quotegrab-test/1.0").expect("Failed to build client");
    let start_url = format!("{}/", mock_server.uri());

    let quotes = get_quotes(&client, &start_url, &origin)
        .await
        .expect("Scrape failed");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("quotes.db");
    let mut storage = open_storage(&db_path).expect("Failed to open DB");

    let report = persist_quotes(&mut storage, &quotes);
    assert_eq!(report.inserted, 3);
    assert_eq!(report.failed, 0);
    assert_eq!(storage.count_quotes().expect("count failed"), 3);
    assert_eq!(storage.count_authors().expect("count failed"), 3);

    // Persisting the same records again is NOT idempotent: no uniqueness
    // constraint, so the rows double.
    let report = persist_quotes(&mut storage, &quotes);
    assert_eq!(report.inserted, 3);
    assert_eq!(storage.count_quotes().expect("count failed"), 6);
}
