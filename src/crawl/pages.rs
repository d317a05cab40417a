// src/crawl/pages.rs
// =============================================================================
// Derives the extra pages we fetch for each input URL.
//
// Social links usually live in the footer, but plenty of sites only list
// them on their about/contact/team pages. So for every URL we also try a
// fixed list of common paths on the same site.
//
// Example:
//   input:  https://example.com/blog/post?id=3
//   base:   https://example.com
//   output: https://example.com/contact, https://example.com/about, ...
//
// This is pure string work - no network I/O happens here.
// =============================================================================

use url::Url;

/// Paths commonly used for contact / about / team content
pub const CANDIDATE_PATHS: [&str; 16] = [
    "/contact",
    "/contact-us",
    "/about",
    "/about-us",
    "/team",
    "/support",
    "/help",
    "/get-in-touch",
    "/meet-the-team",
    "/our-team",
    "/company",
    "/who-we-are",
    "/info",
    "/legal",
    "/press",
    "/reach-us",
];

/// Builds candidate sub-page URLs from a page URL
#[derive(Debug, Clone)]
pub struct PageExpander {
    paths: Vec<&'static str>,
}

impl PageExpander {
    pub fn new() -> Self {
        Self {
            paths: CANDIDATE_PATHS.to_vec(),
        }
    }

    // Returns one URL per candidate path, on the same scheme/host/port as
    // `page_url`. Returns an empty list if `page_url` has no usable base.
    pub fn expand(&self, page_url: &str) -> Vec<String> {
        let Some(base) = base_url(page_url) else {
            return Vec::new();
        };

        self.paths
            .iter()
            .map(|path| format!("{}{}", base, path))
            .collect()
    }
}

impl Default for PageExpander {
    fn default() -> Self {
        Self::new()
    }
}

// Scheme + host (+ port, when it isn't the default one)
//
// Path, query and fragment are discarded. Only http(s) URLs with a host
// have a base; "mailto:x", "file:///tmp" or plain garbage return None.
pub fn base_url(page_url: &str) -> Option<String> {
    let parsed = Url::parse(page_url).ok()?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    let origin = parsed.origin();
    if !origin.is_tuple() {
        return None;
    }

    // ascii_serialization() already omits default ports, e.g.
    // "https://example.com" or "http://localhost:8080"
    Some(origin.ascii_serialization())
}
