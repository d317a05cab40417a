// src/extract/matcher.rs
// =============================================================================
// Finds social media handles in page content.
//
// How it works:
// 1. Every platform has a regex for its profile URL shape
//    (twitter.com/<handle>, linkedin.com/in/<handle>, ...)
// 2. We run each regex over the raw page text (HTML, JSON, anything)
// 3. Each capture becomes a HandleMatch, unless it's a known non-profile
//    path like twitter.com/intent or instagram.com/p
//
// Matching never fails: empty or garbage input just produces no matches.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::platform::{build_rules, Platform, PlatformRule};

/// A handle found on a page
///
/// Identity is (platform, handle); `hijackable` starts out false and is
/// filled in later by the availability prober.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleMatch {
    pub platform: Platform,
    pub handle: String,
    pub hijackable: bool,
}

impl HandleMatch {
    pub fn new(platform: Platform, handle: impl Into<String>) -> Self {
        Self {
            platform,
            handle: handle.into(),
            hijackable: false,
        }
    }

    // Usernames are case-insensitive, so "Acme" and "acme" are the same
    // account. YouTube channel IDs (UCabc... vs UCABC...) are not.
    fn identity(&self) -> (Platform, String) {
        let handle = match self.platform {
            Platform::Youtube => self.handle.clone(),
            _ => self.handle.to_ascii_lowercase(),
        };
        (self.platform, handle)
    }
}

/// Holds the compiled rule table
///
/// Build one at startup and share it (it's read-only)
#[derive(Debug)]
pub struct PatternMatcher {
    rules: Vec<PlatformRule>,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self {
            rules: build_rules(),
        }
    }

    // Returns every handle found in `content`
    //
    // Matches are grouped by platform (in Platform::ALL order); within a
    // platform they keep the order they appear in the text.
    //
    // Example:
    //   content = "<a href='https://twitter.com/acme'>"
    //   result  = [HandleMatch { platform: Twitter, handle: "acme", .. }]
    pub fn find_matches(&self, content: &str) -> Vec<HandleMatch> {
        let mut matches = Vec::new();

        for rule in &self.rules {
            for cap in rule.regex.captures_iter(content) {
                let Some(raw) = cap.get(1) else { continue };

                // "twitter.com/foo%20bar" would otherwise report "foo"
                if !ends_at_boundary(&content[raw.end()..]) {
                    continue;
                }

                // A sentence like "follow instagram.com/acme." captures the
                // full stop too
                let handle = raw.as_str().trim_end_matches('.');

                if handle.is_empty() || rule.is_skipped(handle) {
                    continue;
                }

                matches.push(HandleMatch::new(rule.platform, handle));
            }
        }

        matches
    }
}

// Characters that can legitimately follow a handle in a URL or in markup
const HANDLE_TERMINATORS: &[char] = &[
    '/', '?', '#', '"', '\'', '<', '>', ')', ']', '}', ',', ';', ':', '&', '\\',
];

fn is_terminator(c: char) -> bool {
    c.is_whitespace() || HANDLE_TERMINATORS.contains(&c)
}

// Whether the text right after a capture closes the handle
//
// A dot or exclamation mark only counts when it ends a sentence, so
// "twitter.com/acme." is accepted but "twitter.com/acme.html" is not.
fn ends_at_boundary(rest: &str) -> bool {
    let mut chars = rest.chars();

    match chars.next() {
        None => true,
        Some('.' | '!') => chars.next().map_or(true, is_terminator),
        Some(c) => is_terminator(c),
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// Removes duplicate (platform, handle) pairs
//
// The first occurrence wins and the output keeps first-seen order, so the
// result is the same on every run for the same input.
pub fn dedup_matches(matches: impl IntoIterator<Item = HandleMatch>) -> Vec<HandleMatch> {
    let mut seen = HashSet::new();

    matches
        .into_iter()
        .filter(|m| seen.insert(m.identity()))
        .collect()
}
