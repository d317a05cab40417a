// src/fetch/mock.rs
// =============================================================================
// In-memory Fetcher for tests.
//
// Responses are registered per exact URL. Any URL without a response behaves
// like an unreachable host (the request errors). The fake also records every
// call and tracks how many requests were in flight at once, which is what the
// scheduler's concurrency tests assert on.
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::{FetchedPage, Fetcher};

#[derive(Debug, Clone)]
enum MockResponse {
    Page(StatusCode, String),
    Error,
}

#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, MockResponse>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `url` with a 200 and the given body
    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(mut self, url: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.responses
            .insert(url.to_string(), MockResponse::Page(status, body.to_string()));
        self
    }

    /// Make requests to `url` fail like a network error
    pub fn with_error(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), MockResponse::Error);
        self
    }

    /// Make every request take at least `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == url).count()
    }

    /// Highest number of requests observed running at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.calls.lock().unwrap().push(url.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.responses.get(url) {
            Some(MockResponse::Page(status, body)) => Ok(FetchedPage {
                status: *status,
                body: body.clone(),
            }),
            Some(MockResponse::Error) | None => Err(anyhow!("connection refused: {}", url)),
        }
    }
}
