// src/crawl/scheduler.rs
// =============================================================================
// Runs the worker for every URL with bounded concurrency.
//
// How it works:
// - A Semaphore with N permits is the admission gate. The loop below waits
//   for a permit before spawning each worker, so at most N workers exist at
//   once. The permit moves into the worker task and is released when the
//   task ends, whether it found handles, found nothing, or panicked
// - Workers send their UrlResult over an mpsc channel to a single writer
//   task, which is the only code that touches the output
// - Once every URL has been spawned we drop our Sender and wait for all
//   workers. The channel closes when the last worker's Sender is dropped,
//   and only then does the writer close the JSON array
//
// Results are written in completion order, not input order.
// =============================================================================

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::AsyncWrite;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use super::worker::Analyzer;
use crate::output::{write_results, OutputSummary};

/// What happened during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// URLs handed to workers
    pub scheduled: usize,
    /// What actually made it into the output
    pub output: OutputSummary,
}

pub struct Scheduler {
    analyzer: Arc<Analyzer>,
    concurrency: usize,
}

impl Scheduler {
    // Parameters:
    //   analyzer: shared by every worker
    //   concurrency: maximum number of URLs processed at the same time
    pub fn new(analyzer: Arc<Analyzer>, concurrency: usize) -> Self {
        Self {
            analyzer,
            // A zero-permit semaphore would never admit anything
            concurrency: concurrency.max(1),
        }
    }

    // Processes every URL once and writes the results to `sink`
    //
    // Returns once all workers are done and the output is complete. The only
    // error is a failure to write the output; per-URL failures never surface.
    pub async fn run<W>(&self, urls: Vec<String>, sink: W) -> Result<RunSummary>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let scheduled = urls.len();

        let (tx, rx) = mpsc::channel(self.concurrency * 2);
        let writer = tokio::spawn(write_results(rx, sink));

        let gate = Arc::new(Semaphore::new(self.concurrency));
        let mut workers = JoinSet::new();

        for (index, url) in urls.into_iter().enumerate() {
            // Keeps the set at roughly `concurrency` entries on long URL lists
            reap_finished(&mut workers);

            // Blocks here until a worker finishes and frees its slot
            let permit = gate
                .clone()
                .acquire_owned()
                .await
                .context("Admission gate closed unexpectedly")?;

            let analyzer = Arc::clone(&self.analyzer);
            let tx = tx.clone();

            workers.spawn(async move {
                let _permit = permit;
                debug!(index, url = %url, "worker started");

                if let Some(result) = analyzer.analyze(&url).await {
                    // Fails only if the writer already gave up; its error is
                    // reported when we join it below
                    let _ = tx.send(result).await;
                }

                debug!(index, url = %url, "worker done");
            });
        }

        // The writer finishes once every clone of tx is gone
        drop(tx);

        while let Some(joined) = workers.join_next().await {
            report_join(joined);
        }

        let output = writer.await.context("Output writer task failed")??;

        Ok(RunSummary { scheduled, output })
    }
}

// Collects workers that have already finished, without waiting.
// Returns how many were removed from the set.
fn reap_finished(workers: &mut JoinSet<()>) -> usize {
    let mut reaped = 0;
    while let Some(joined) = workers.try_join_next() {
        report_join(joined);
        reaped += 1;
    }
    reaped
}

fn report_join(joined: Result<(), JoinError>) {
    if let Err(e) = joined {
        warn!(error = %e, "worker task failed");
    }
}
