// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing)
// 3. Load the URL list and create the output file
// 4. Wire the fetcher, prober and analyzer together and run the scheduler
// 5. Print a summary and exit (0 = done, 1 = startup/output error)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Arc: Shared ownership of the HTTP client and analyzer across tasks
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - per-URL workers and the scheduler
mod extract; // src/extract/ - social handle patterns
mod fetch; // src/fetch/ - HTTP access behind a trait
mod input; // src/input.rs - URL list loading
mod output; // src/output.rs - result records and JSON writer
mod probe; // src/probe.rs - twitter availability check

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use std::path::Path;
use std::sync::Arc;
use tokio::io::BufWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use crawl::{Analyzer, RunSummary, Scheduler};
use fetch::{Fetcher, HttpFetcher};
use probe::AvailabilityProber;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Parse command-line arguments into our Cli struct
    // Missing or invalid arguments make clap print a message and exit(2) here
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the summary on stdout.
// RUST_LOG overrides the default filter entirely.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,handle_hunter=debug"
    } else {
        "warn,handle_hunter=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// This is the main application logic
async fn run(cli: Cli) -> Result<()> {
    let urls = input::load_urls(&cli.file).await?;
    println!("🔍 Loaded {} URL(s) from {}", urls.len(), cli.file.display());

    // Create the output before doing any network work so a bad path fails fast
    let output = create_output(&cli.output).await?;

    // One HTTP client for everything (connection pooling)
    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new()?);

    let prober = if cli.skip_probe {
        println!("⏭️  Availability checks disabled");
        None
    } else {
        Some(AvailabilityProber::new(Arc::clone(&fetcher), cli.probe_url.clone()))
    };

    let analyzer = Arc::new(Analyzer::new(fetcher, prober));
    let scheduler = Scheduler::new(analyzer, cli.concurrency());

    println!("🌐 Scanning with up to {} concurrent worker(s)...\n", cli.concurrency());

    let summary = scheduler.run(urls, output).await?;

    print_summary(&summary, &cli.output);
    Ok(())
}

// Opens (truncating) the results file
async fn create_output(path: &Path) -> Result<BufWriter<tokio::fs::File>> {
    let file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;

    Ok(BufWriter::new(file))
}

// Prints a short human-readable report
fn print_summary(summary: &RunSummary, output_path: &Path) {
    println!();
    println!("📊 Summary:");
    println!("   📋 URLs scanned: {}", summary.scheduled);
    println!("   ✅ URLs with results: {}", summary.output.records);
    println!("   🔗 Handles found: {}", summary.output.handles);
    println!("   ⚠️  Possibly hijackable: {}", summary.output.hijackable);
    println!();
    println!("✅ Results written to {}", output_path.display());
}
