use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

use crate::config::ScanConfig;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("request failed: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(err)
        } else {
            FetchError::Request(err)
        }
    }
}

/// Anything that can turn a URL into page HTML.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher shared across every target of a scan.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &ScanConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_str(&config.accept)?);

        // Several state portals serve expired or self-signed certificates.
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { client })
    }
}

impl PageSource for PageFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text()?)
    }
}
