// src/fetch/http.rs
// =============================================================================
// The real Fetcher, backed by reqwest.
//
// One Client is created at startup and shared by every worker. reqwest's
// Client is an Arc internally, so sharing it gives us connection pooling
// across all URLs for free.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use super::{FetchedPage, Fetcher};

// Some sites serve an empty page or a 403 to clients without a browser UA
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetcher that performs real HTTP GET requests
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10)) // 10 second timeout per request
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        // Only successful pages are worth reading; the body of an error page
        // would just add noise to the handle search
        let body = if status.is_success() {
            response.text().await?
        } else {
            String::new()
        };

        Ok(FetchedPage { status, body })
    }

    // The availability probe only cares about the status code, so skip
    // downloading the (often large) profile page
    async fn status(&self, url: &str) -> Result<StatusCode> {
        let response = self.client.get(url).send().await?;
        Ok(response.status())
    }
}
