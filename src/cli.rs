// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// handle-hunter has a single mode of operation, so unlike a multi-command
// tool we don't need subcommands: one flat struct holds every option.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - PathBuf: An owned, platform-aware file path
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

/// Default profile URL used to check whether a twitter handle is taken.
/// `{handle}` is replaced with the handle being probed.
pub const DEFAULT_PROBE_URL: &str = "https://x.com/{handle}";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "handle-hunter",
    version = "0.1.0",
    about = "Crawl websites for social media handles and flag ones that look hijackable",
    long_about = "handle-hunter fetches every URL in a list (plus a handful of common \
                  about/contact/team pages), extracts social media handles from the \
                  content and checks whether twitter handles still resolve. \
                  Results are written as a JSON array."
)]
pub struct Cli {
    /// File containing the URLs to scan, one per line
    ///
    /// Blank lines are ignored. This option is required.
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,

    /// Number of URLs processed concurrently (default: 5)
    ///
    /// The range parser rejects 0 at parse time.
    #[arg(
        short = 't',
        long = "threads",
        default_value_t = 5,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub threads: u16,

    /// Where to write the JSON results
    #[arg(short = 'o', long = "output", default_value = "result.json")]
    pub output: PathBuf,

    /// Print diagnostics for failed fetches and probes
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Don't check whether twitter handles are available
    ///
    /// Every handle is then reported with hijackable = false.
    #[arg(long)]
    pub skip_probe: bool,

    /// Profile URL template used for the availability check
    #[arg(long = "probe-url", default_value = DEFAULT_PROBE_URL)]
    pub probe_url: String,
}

impl Cli {
    /// The concurrency limit as a usize (what tokio's Semaphore wants)
    pub fn concurrency(&self) -> usize {
        usize::from(self.threads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["handle-hunter", "-f", "urls.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("urls.txt"));
        assert_eq!(cli.concurrency(), 5);
        assert_eq!(cli.output, PathBuf::from("result.json"));
        assert_eq!(cli.probe_url, "https://x.com/{handle}");
        assert!(!cli.verbose);
        assert!(!cli.skip_probe);
        assert_eq!(cli.probe_url, DEFAULT_PROBE_URL);
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "handle-hunter",
            "--file",
            "in.txt",
            "-t",
            "50",
            "-o",
            "out.json",
            "-v",
            "--skip-probe",
        ])
        .unwrap();
        assert_eq!(cli.concurrency(), 50);
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert!(cli.verbose);
        assert!(cli.skip_probe);
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["handle-hunter"]).is_err());
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(Cli::try_parse_from(["handle-hunter", "-f", "x", "-t", "0"]).is_err());
    }
}
