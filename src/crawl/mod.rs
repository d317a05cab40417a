// src/crawl/mod.rs
// =============================================================================
// This module handles crawling: deciding which pages to fetch for each URL,
// processing a URL end to end, and running many URLs at once.
//
// Submodules:
// - pages: Derives the about/contact/team pages to check for each site
// - worker: Fetches and analyzes a single URL
// - scheduler: Bounded-concurrency worker pool that feeds the output writer
// =============================================================================

mod pages;
mod scheduler;
mod worker;

// Re-export the pieces main.rs wires together
pub use scheduler::{RunSummary, Scheduler};
pub use worker::Analyzer;
