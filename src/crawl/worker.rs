// src/crawl/worker.rs
// =============================================================================
// Processes a single input URL from start to finish.
//
// How it works:
// 1. Fetch the URL. If that fails (network error or non-2xx status) we give
//    up on this URL and produce no result at all
// 2. Fetch every candidate sub-page (/about, /contact, ...) of the same site.
//    Sub-pages that fail are skipped
// 3. Extract handles from all fetched content
// 4. Deduplicate: the first occurrence of a (platform, handle) pair wins,
//    main page first, then sub-pages in candidate order
// 5. Probe twitter handles for availability (if probing is enabled)
// 6. Log one line per handle and return the finished UrlResult
//
// Nothing in here returns an error. Every failure just means "this source
// contributed nothing", and is only visible with --verbose.
//
// Requests are issued one at a time. The scheduler's concurrency limit is a
// limit on workers, so keeping each worker sequential keeps the number of
// open requests at or below that limit too.
// =============================================================================

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info};

use super::pages::PageExpander;
use crate::extract::{dedup_matches, HandleMatch, PatternMatcher};
use crate::fetch::Fetcher;
use crate::output::UrlResult;
use crate::probe::AvailabilityProber;

/// Everything a worker needs, built once and shared by all workers
pub struct Analyzer {
    fetcher: Arc<dyn Fetcher>,
    matcher: PatternMatcher,
    expander: PageExpander,
    prober: Option<AvailabilityProber>,
}

impl Analyzer {
    // Parameters:
    //   fetcher: used for the main page and all sub-pages
    //   prober: None disables availability checks (everything reports false)
    pub fn new(fetcher: Arc<dyn Fetcher>, prober: Option<AvailabilityProber>) -> Self {
        Self {
            fetcher,
            matcher: PatternMatcher::new(),
            expander: PageExpander::new(),
            prober,
        }
    }

    /// Runs the whole pipeline for one URL. None means the main page failed.
    pub async fn analyze(&self, url: &str) -> Option<UrlResult> {
        let main_page = self.fetch_content(url).await?;

        let mut found = self.matcher.find_matches(&main_page);

        // One request at a time; see the note at the top of this file
        let sub_pages: Vec<String> = stream::iter(self.expander.expand(url))
            .filter_map(|page_url| async move { self.fetch_content(&page_url).await })
            .collect()
            .await;

        for content in &sub_pages {
            found.extend(self.matcher.find_matches(content));
        }

        let unique = dedup_matches(found);

        let handles: Vec<HandleMatch> = match &self.prober {
            Some(prober) => {
                stream::iter(unique)
                    .then(|m| prober.check(m))
                    .collect()
                    .await
            }
            None => unique,
        };

        for handle in &handles {
            info!(
                url,
                platform = %handle.platform,
                handle = %handle.handle,
                hijackable = handle.hijackable,
                "found handle"
            );
        }

        Some(UrlResult {
            url: url.to_string(),
            handles,
        })
    }

    // Returns the body of a successful (2xx) page, None otherwise
    async fn fetch_content(&self, url: &str) -> Option<String> {
        match self.fetcher.fetch(url).await {
            Ok(page) if page.is_success() => Some(page.body),
            Ok(page) => {
                debug!(url, status = %page.status, "skipping page with non-success status");
                None
            }
            Err(e) => {
                debug!(url, error = %e, "failed to fetch page");
                None
            }
        }
    }
}
