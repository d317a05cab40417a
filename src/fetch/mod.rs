// src/fetch/mod.rs
// =============================================================================
// This module is the only place that talks to the network.
//
// Everything else (the worker, the prober, the scheduler) goes through the
// `Fetcher` trait, which means tests can swap in an in-memory fake instead of
// hitting real websites.
//
// Submodules:
// - http: The real implementation using reqwest
// - mock: A test-only fake with canned responses (only compiled for tests)
//
// Rust concepts:
// - Traits: Shared behavior that different types can implement
// - async-trait: Rust traits can't (object-safely) contain async fns yet, so
//   the #[async_trait] macro boxes the futures for us
// - Send + Sync: Required so one Fetcher can be shared across tokio tasks
// =============================================================================

mod http;
#[cfg(test)]
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;

pub use http::HttpFetcher;

/// Status and body of a fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: StatusCode,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

// Issues GET requests
//
// An Err means the request itself failed (DNS, connection refused, timeout).
// Any HTTP status, including 404 or 500, is an Ok - callers decide what a
// given status means to them.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a page and read its body
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;

    /// GET a page when only the status code matters
    async fn status(&self, url: &str) -> Result<StatusCode> {
        Ok(self.fetch(url).await?.status)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The worker only needs "give me the page at this URL"
//    - Tests can provide a fake that returns whatever we want, instantly,
//      without a network connection
//
// 2. What is a default method?
//    - `status` has a body in the trait, so implementors get it for free
//    - HttpFetcher overrides it to avoid downloading the body
//
// 3. Why Result<FetchedPage> and not Result<String>?
//    - A 404 is still a valid answer (the prober relies on it!)
//    - Only transport failures should be errors
// -----------------------------------------------------------------------------
