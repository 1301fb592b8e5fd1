//! Resolve many covers at once.
//!
//! N persistent tokio tasks pull candidate lists from a bounded
//! async-channel and send finished reports to an unbounded channel. Each
//! list gets its own cursor and target, so no resolution state is shared
//! between records.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use crate::candidates::CandidateList;
use crate::cursor::{CoverCursor, CoverSlot, ResolutionOutcome};
use crate::probe::{Probe, resolve_cover};

/// Per-record ceiling. A record that exceeds it is reported with its
/// placeholder and zero attempts.
const SAFETY_TIMEOUT: Duration = Duration::from_secs(120);

/// Result for one submitted candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverReport {
    /// Position of the list in the submitted batch.
    pub index: usize,
    pub title: String,
    pub outcome: ResolutionOutcome,
}

pub struct CoverPool {
    result_rx: mpsc::UnboundedReceiver<CoverReport>,
    _handles: Vec<JoinHandle<()>>,
}

impl CoverPool {
    /// Spawn `jobs` workers (at least one) and queue every list.
    ///
    /// Submission runs in its own task, so results can be received while
    /// lists are still being queued. Reports arrive in completion order.
    pub fn start(jobs: usize, lists: Vec<CandidateList>, probe: Probe) -> Self {
        let jobs = jobs.max(1);
        let (work_tx, work_rx) = async_channel::bounded::<(usize, CandidateList)>(jobs);
        let (result_tx, result_rx) = mpsc::unbounded_channel::<CoverReport>();
        let probe = Arc::new(probe);

        let handles: Vec<JoinHandle<()>> = (0..jobs)
            .map(|_| {
                let work_rx = work_rx.clone();
                let result_tx = result_tx.clone();
                let probe = probe.clone();
                tokio::spawn(async move {
                    while let Ok((index, list)) = work_rx.recv().await {
                        let report = resolve_one(index, list, &probe).await;
                        if result_tx.send(report).is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();

        drop(result_tx);

        tokio::spawn(async move {
            for item in lists.into_iter().enumerate() {
                if work_tx.send(item).await.is_err() {
                    break;
                }
            }
        });

        Self {
            result_rx,
            _handles: handles,
        }
    }

    /// Next finished report, or `None` once every list is done.
    pub async fn recv(&mut self) -> Option<CoverReport> {
        self.result_rx.recv().await
    }

    /// Drain the pool and return reports in submission order.
    pub async fn collect(mut self) -> Vec<CoverReport> {
        let mut reports = Vec::new();
        while let Some(report) = self.recv().await {
            reports.push(report);
        }
        reports.sort_by_key(|r| r.index);
        reports
    }
}

async fn resolve_one(index: usize, list: CandidateList, probe: &Probe) -> CoverReport {
    let title = list.title().to_string();
    let placeholder = list.placeholder().to_string();
    let mut slot = CoverSlot::new();
    let cursor = CoverCursor::new(list);

    let outcome =
        match tokio::time::timeout(SAFETY_TIMEOUT, resolve_cover(cursor, &mut slot, probe)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                log::warn!(
                    "Cover resolution for '{}' timed out after {}s",
                    title,
                    SAFETY_TIMEOUT.as_secs()
                );
                ResolutionOutcome::Placeholder {
                    source: placeholder,
                    attempts: 0,
                }
            }
        };

    CoverReport {
        index,
        title,
        outcome,
    }
}
