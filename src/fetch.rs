//! Network access.
//!
//! The pipeline only needs two kinds of GET: text (symbol script,
//! stylesheet) and bytes (font binary). [`Fetch`] is the seam that lets
//! tests and benches run without a network.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::error::{FetchStage, IconfontError, Result};

/// Something that can GET a URL.
pub trait Fetch {
    /// GET a binary body.
    fn fetch_bytes(&self, stage: FetchStage, url: &Url) -> Result<Vec<u8>>;

    /// GET a text body (decoded as UTF-8, lossy).
    fn fetch_text(&self, stage: FetchStage, url: &Url) -> Result<String> {
        let bytes = self.fetch_bytes(stage, url)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Blocking HTTP client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Self::TIMEOUT)
            .user_agent(concat!("iconfont/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| IconfontError::Config {
                message: format!("Failed to build HTTP client: {}", e),
                help: None,
            })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch_bytes(&self, stage: FetchStage, url: &Url) -> Result<Vec<u8>> {
        let network_error = |message: String| IconfontError::Network {
            stage,
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| network_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(format!("HTTP {}", status)));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| network_error(e.to_string()))
    }
}
