// src/extract/platform.rs
// =============================================================================
// The closed set of social platforms we know how to recognize, and the
// matching rule (regex + ignored path segments) for each of them.
//
// The rules are built once at startup and then only read, so the whole table
// can be shared between workers without any locking.
//
// Rust concepts:
// - Enums with derives: Copy/Hash let a Platform be used as a map key
// - serde rename_all: serialize variants as "twitter", "linkedin", ...
// =============================================================================

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A social media platform whose profile URLs we extract handles from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Linkedin,
    Youtube,
    Facebook,
    Instagram,
    Tiktok,
}

impl Platform {
    /// Every platform, in the order their rules are applied
    pub const ALL: [Platform; 6] = [
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Youtube,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Tiktok,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Youtube => "youtube",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }

    // Regex for this platform's profile URLs
    //
    // Capture group 1 is always the handle. (?i) makes the host part case
    // insensitive; the scheme and "www." are optional because we only care
    // about the host + path shape. The leading \b stops "x.com" from matching
    // the tail of hosts like "netflix.com".
    fn pattern(&self) -> &'static str {
        match self {
            Platform::Twitter => r"(?i)\b(?:twitter|x)\.com/@?([A-Za-z0-9_-]+)",
            Platform::Linkedin => r"(?i)\blinkedin\.com/(?:in|company)/([A-Za-z0-9_-]+)",
            Platform::Youtube => r"(?i)\byoutube\.com/(?:@|c/|channel/|user/)([A-Za-z0-9_.-]+)",
            Platform::Facebook => r"(?i)\bfacebook\.com/([A-Za-z0-9_.-]+)",
            Platform::Instagram => r"(?i)\binstagram\.com/([A-Za-z0-9_.-]+)",
            Platform::Tiktok => r"(?i)\btiktok\.com/@([A-Za-z0-9_.-]+)",
        }
    }

    // Path segments that look like handles but are site features
    // (share buttons, post permalinks, login pages, ...)
    fn skip_segments(&self) -> &'static [&'static str] {
        match self {
            Platform::Twitter => &[
                "intent", "share", "hashtag", "search", "i", "home", "login", "signup",
                "explore", "settings", "privacy", "tos", "notifications", "messages",
            ],
            Platform::Facebook => &[
                "sharer", "sharer.php", "share", "share.php", "photo", "photo.php",
                "photos", "events", "groups", "watch", "marketplace", "login",
                "login.php", "dialog", "plugins", "tr", "profile.php", "pages",
            ],
            Platform::Instagram => &[
                "p", "reel", "reels", "stories", "explore", "accounts", "tv", "s", "share",
            ],
            Platform::Linkedin | Platform::Youtube | Platform::Tiktok => &[],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled matching rule for a single platform
#[derive(Debug)]
pub struct PlatformRule {
    pub platform: Platform,
    pub regex: Regex,
    skip_segments: &'static [&'static str],
}

impl PlatformRule {
    fn new(platform: Platform) -> Self {
        // The patterns are compile-time constants covered by the tests below,
        // so a failure here is a programming error, not a runtime condition
        let regex = Regex::new(platform.pattern()).expect("platform pattern is a valid regex");

        Self {
            platform,
            regex,
            skip_segments: platform.skip_segments(),
        }
    }

    /// Whether a captured path segment is a site feature rather than a handle
    pub fn is_skipped(&self, segment: &str) -> bool {
        self.skip_segments
            .iter()
            .any(|skip| skip.eq_ignore_ascii_case(segment))
    }
}

/// Builds the rule table for every platform
pub fn build_rules() -> Vec<PlatformRule> {
    Platform::ALL.iter().copied().map(PlatformRule::new).collect()
}
