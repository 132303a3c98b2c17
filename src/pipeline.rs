//! Concurrent fan-out/fan-in evaluation of a line stream.
//!
//! A fixed pool of workers, each owning a private [`CsvReader`] and a
//! privately built [`FilterTree`] over it. Trees are structurally
//! identical across workers but their accessors are bound to that
//! worker's reader, so no mutable state is shared and no cross-worker
//! locking is needed.

use crate::filter::FilterTree;
use crate::reader::{CsvReader, RecordSource};
use anyhow::Result;
use tokio::sync::mpsc;

/// Per-worker input channel capacity.
const WORKER_QUEUE_DEPTH: usize = 1000;

/// Distribute `lines` round-robin across `workers` evaluation tasks and
/// collect the lines whose filter tree evaluated to true.
///
/// `build` is called once per worker with that worker's private reader
/// and must construct the tree over it; a build failure aborts the run
/// before any worker starts. Closing the per-worker channels is the
/// completion signal: each worker drains its queue and exits. Match
/// order across workers is not guaranteed.
pub async fn run<B>(
    lines: impl IntoIterator<Item = String>,
    workers: usize,
    build: B,
) -> Result<Vec<String>>
where
    B: Fn(&CsvReader) -> Result<FilterTree>,
{
    let workers = workers.max(1);

    let (match_tx, mut match_rx) = mpsc::unbounded_channel();
    let mut line_txs = Vec::with_capacity(workers);
    let mut handles = Vec::with_capacity(workers);

    for id in 0..workers {
        let (line_tx, mut line_rx) = mpsc::channel::<String>(WORKER_QUEUE_DEPTH);
        let reader = CsvReader::new();
        let tree = build(&reader)?;
        let match_tx = match_tx.clone();

        handles.push(tokio::spawn(async move {
            let mut matched = 0usize;
            while let Some(line) = line_rx.recv().await {
                reader.feed(&line);
                if reader.load_next_line() && tree.evaluate() {
                    matched += 1;
                    let _ = match_tx.send(line);
                }
            }
            log::debug!("worker {} drained, {} lines matched", id, matched);
        }));
        line_txs.push(line_tx);
    }
    drop(match_tx);

    for (i, line) in lines.into_iter().enumerate() {
        // Send only fails if a worker panicked; the join below reports it.
        let _ = line_txs[i % workers].send(line).await;
    }
    drop(line_txs);

    let mut matches = Vec::new();
    while let Some(line) = match_rx.recv().await {
        matches.push(line);
    }

    for handle in handles {
        handle.await?;
    }

    Ok(matches)
}
