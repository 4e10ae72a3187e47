#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use govt_job_scanner::{ScanConfig, Target};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

/// Default headers and keywords, no pause between targets.
pub fn test_config(targets: Vec<Target>) -> ScanConfig {
    ScanConfig {
        delay: Duration::ZERO,
        timeout: Duration::from_secs(2),
        ..ScanConfig::with_targets(targets)
    }
}

/// Serves `html` at `url_path` with a 200.
pub async fn mount_page(server: &MockServer, url_path: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html.to_string())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Answers `url_path` only after `delay`, long enough to trip the client timeout.
pub async fn mount_slow_page(server: &MockServer, url_path: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<a href=\"/late\">Public Health Officer</a>")
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, url_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
