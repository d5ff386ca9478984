//! Driver: seeds the walk from the input paths, runs the pool, and
//! assembles the final per-root report.

use std::path::PathBuf;

use serde::Serialize;

use crate::walk::pool::{WalkContext, run_pool};
use crate::walk::probe::probe;
use crate::walk::queue::{PendingTask, WorkQueue};
use crate::walk::status::RunStatus;
use crate::walk::totals::TotalsTable;

/// Walk configuration.
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Worker thread count; non-positive requests are clamped to 1.
    pub workers: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self { workers: 1 }
    }
}

/// Final total for one input path, in 1024-byte units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootTotal {
    /// The path exactly as given on input.
    pub path: PathBuf,
    /// Allocated size of the whole subtree, 512-byte blocks halved.
    pub kilobytes: u64,
}

/// Outcome of a complete walk: one entry per input path, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    /// Per-root totals, input order.
    pub roots: Vec<RootTotal>,
    /// Whether any stat or directory read failed along the way. Totals are
    /// still best-effort complete; this only drives the exit status.
    pub degraded: bool,
}

/// Seeds roots, launches the worker pool, joins it, and reports.
#[derive(Debug, Default)]
pub struct Driver {
    options: WalkOptions,
}

impl Driver {
    #[must_use]
    pub fn new(options: WalkOptions) -> Self {
        Self { options }
    }

    /// Walk every input path and return the per-root totals in input order.
    ///
    /// Each root is resolved synchronously before any thread starts: its
    /// own allocation size is credited to its slot, and only directories
    /// enter the queue. A root that cannot be statted is logged, flags the
    /// run, and reports 0. If no root is a directory there is nothing to
    /// expand and the pool is never launched.
    #[must_use]
    pub fn run(&self, paths: &[PathBuf]) -> WalkReport {
        let ctx = WalkContext {
            queue: WorkQueue::new(self.options.workers),
            totals: TotalsTable::new(paths.len()),
            status: RunStatus::new(),
        };

        for (root_id, path) in paths.iter().enumerate() {
            match probe(path) {
                Ok(result) => {
                    ctx.totals.add(root_id, result.blocks);
                    if result.is_dir {
                        ctx.queue.push(PendingTask {
                            root_id,
                            path: path.clone(),
                        });
                    }
                }
                Err(err) => ctx.status.flag(&err),
            }
        }

        if !ctx.queue.is_empty() {
            run_pool(&ctx);
        }

        let degraded = ctx.status.is_degraded();
        let roots = paths
            .iter()
            .zip(ctx.totals.into_totals())
            .map(|(path, blocks)| RootTotal {
                path: path.clone(),
                kilobytes: blocks / 2,
            })
            .collect();

        WalkReport { roots, degraded }
    }
}
