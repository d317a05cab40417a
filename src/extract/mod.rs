// src/extract/mod.rs
// =============================================================================
// This module turns page content into social media handles.
//
// Submodules:
// - platform: The supported platforms and their URL patterns
// - matcher: Runs the patterns over text and deduplicates the results
// =============================================================================

mod matcher;
mod platform;

pub use matcher::{dedup_matches, HandleMatch, PatternMatcher};
pub use platform::Platform;
