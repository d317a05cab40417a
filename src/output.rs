// src/output.rs
// =============================================================================
// Result records and the task that writes them out.
//
// Output format: a JSON array with one object per URL that produced a result:
//
//   [
//   {"url":"https://example.com","handles":[{"platform":"twitter","handle":"acme","hijackable":false}]},
//   {"url":"https://example.org","handles":[]}
//   ]
//
// Only one task ever touches the output file. Workers send finished results
// over a channel; this task writes each one as it arrives (so partial results
// hit the disk during long runs) and closes the array once the channel is
// closed, which only happens after every worker has finished.
// =============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

use crate::extract::HandleMatch;

/// Everything found for a single input URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResult {
    pub url: String,
    pub handles: Vec<HandleMatch>,
}

impl UrlResult {
    pub fn hijackable_count(&self) -> usize {
        self.handles.iter().filter(|h| h.hijackable).count()
    }
}

/// Totals over everything that was written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputSummary {
    pub records: usize,
    pub handles: usize,
    pub hijackable: usize,
}

// Drains `results` into `sink` as a JSON array
//
// Returns an error if writing fails; the receiver is dropped at that point,
// so workers still sending just see a closed channel.
pub async fn write_results<W>(mut results: mpsc::Receiver<UrlResult>, mut sink: W) -> Result<OutputSummary>
where
    W: AsyncWrite + Unpin,
{
    let mut summary = OutputSummary::default();

    sink.write_all(b"[\n").await.context("Failed to write output")?;

    while let Some(result) = results.recv().await {
        // Separator goes *before* every record but the first, so the array
        // never ends with a dangling comma
        if summary.records > 0 {
            sink.write_all(b",\n").await.context("Failed to write output")?;
        }

        let json = serde_json::to_vec(&result).context("Failed to serialize result")?;
        sink.write_all(&json).await.context("Failed to write output")?;

        // The sink is usually buffered; push each record through so an
        // interrupted run still leaves every finished result on disk
        sink.flush().await.context("Failed to flush output")?;

        summary.records += 1;
        summary.handles += result.handles.len();
        summary.hijackable += result.hijackable_count();
    }

    sink.write_all(b"\n]\n").await.context("Failed to write output")?;
    sink.flush().await.context("Failed to flush output")?;

    Ok(summary)
}
