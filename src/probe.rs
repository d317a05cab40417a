// src/probe.rs
// =============================================================================
// Checks whether a twitter handle looks available for registration.
//
// How it works:
// - Build the profile URL for the handle (https://x.com/<handle>)
// - Issue a single GET request
// - 404 Not Found => the handle is reported as hijackable
// - Anything else (200, 403, 500, timeouts, DNS errors...) => not hijackable
//
// This is a heuristic. A 404 doesn't prove the name can be registered, and a
// network error is reported exactly like "the account exists". Callers get a
// plain bool and can't tell "confirmed taken" from "couldn't check".
//
// Only twitter handles are probed. Every other platform always reports false.
// =============================================================================

use reqwest::StatusCode;
use std::sync::Arc;
use tracing::debug;

use crate::extract::{HandleMatch, Platform};
use crate::fetch::Fetcher;

/// The one platform we know how to probe
pub const PROBED_PLATFORM: Platform = Platform::Twitter;

const HANDLE_PLACEHOLDER: &str = "{handle}";

pub struct AvailabilityProber {
    fetcher: Arc<dyn Fetcher>,
    url_template: String,
}

impl AvailabilityProber {
    // Parameters:
    //   fetcher: shared HTTP client
    //   url_template: profile URL with a "{handle}" placeholder; if the
    //                 placeholder is missing the handle is appended as a path
    pub fn new(fetcher: Arc<dyn Fetcher>, url_template: impl Into<String>) -> Self {
        Self {
            fetcher,
            url_template: url_template.into(),
        }
    }

    pub fn profile_url(&self, handle: &str) -> String {
        if self.url_template.contains(HANDLE_PLACEHOLDER) {
            self.url_template.replace(HANDLE_PLACEHOLDER, handle)
        } else {
            format!("{}/{}", self.url_template.trim_end_matches('/'), handle)
        }
    }

    // Returns true only if the profile URL answered 404
    pub async fn is_hijackable(&self, handle: &str) -> bool {
        let url = self.profile_url(handle);

        match self.fetcher.status(&url).await {
            Ok(status) => status == StatusCode::NOT_FOUND,
            Err(e) => {
                debug!(handle, url = %url, error = %e, "availability probe failed");
                false
            }
        }
    }

    // Fills in `hijackable` for a match
    //
    // Matches for platforms we don't probe come back with hijackable = false
    // and no request is made.
    pub async fn check(&self, mut found: HandleMatch) -> HandleMatch {
        found.hijackable = if found.platform == PROBED_PLATFORM {
            self.is_hijackable(&found.handle).await
        } else {
            false
        };
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::mock::MockFetcher;
    use crate::fetch::HttpFetcher;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEMPLATE: &str = "https://twitter.test/{handle}";

    fn prober(fetcher: MockFetcher) -> (Arc<MockFetcher>, AvailabilityProber) {
        let fetcher = Arc::new(fetcher);
        let prober = AvailabilityProber::new(fetcher.clone(), TEMPLATE);
        (fetcher, prober)
    }

    #[test]
    fn test_profile_url() {
        let (_, p) = prober(MockFetcher::new());
        assert_eq!(p.profile_url("acme"), "https://twitter.test/acme");

        let bare = AvailabilityProber::new(Arc::new(MockFetcher::new()), "https://t.test/");
        assert_eq!(bare.profile_url("acme"), "https://t.test/acme");
    }

    #[tokio::test]
    async fn test_not_found_is_hijackable() {
        let (_, p) = prober(MockFetcher::new().with_status("https://twitter.test/gone", 404, ""));
        assert!(p.is_hijackable("gone").await);
    }

    #[tokio::test]
    async fn test_other_outcomes_are_not_hijackable() {
        let (_, p) = prober(
            MockFetcher::new()
                .with_page("https://twitter.test/taken", "profile")
                .with_status("https://twitter.test/blocked", 403, "")
                .with_status("https://twitter.test/broken", 500, "")
                .with_error("https://twitter.test/offline"),
        );

        for handle in ["taken", "blocked", "broken", "offline"] {
            assert!(!p.is_hijackable(handle).await, "{} should not be hijackable", handle);
        }
    }

    #[tokio::test]
    async fn test_only_twitter_is_checked() {
        // Every profile URL 404s, so anything probed would come back true
        let (fetcher, p) = prober(
            MockFetcher::new()
                .with_status("https://twitter.test/acme", 404, "")
                .with_status("https://twitter.test/acme.tok", 404, ""),
        );

        let tw = p.check(HandleMatch::new(Platform::Twitter, "acme")).await;
        assert!(tw.hijackable);

        for platform in Platform::ALL.into_iter().filter(|p| *p != Platform::Twitter) {
            let other = p.check(HandleMatch::new(platform, "acme.tok")).await;
            assert!(!other.hijackable, "{} must never be hijackable", platform);
        }

        assert_eq!(fetcher.calls(), vec!["https://twitter.test/acme"]);
    }

    #[tokio::test]
    async fn test_availability_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/free_name"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/jack"))
            .respond_with(ResponseTemplate::new(200).set_body_string("profile"))
            .mount(&server)
            .await;

        let fetcher = Arc::new(HttpFetcher::new().unwrap());
        let p = AvailabilityProber::new(fetcher, format!("{}/{{handle}}", server.uri()));

        assert!(p.is_hijackable("free_name").await);
        assert!(!p.is_hijackable("jack").await);
    }
}
