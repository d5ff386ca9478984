//! Worker pool: symmetric worker loops over the shared walk context.

#![allow(missing_docs)]

use std::thread;

use crate::walk::listing::list_children;
use crate::walk::probe::probe;
use crate::walk::queue::{PendingTask, WorkQueue};
use crate::walk::status::RunStatus;
use crate::walk::totals::TotalsTable;

/// Shared state constructed once by the driver and borrowed by every
/// worker. No ambient globals: the queue, the totals, and the error flag
/// each guard their own slice of mutable state.
#[derive(Debug)]
pub struct WalkContext {
    pub queue: WorkQueue,
    pub totals: TotalsTable,
    pub status: RunStatus,
}

/// Launch one worker per queue slot and join them all.
///
/// Workers are symmetric; identity only indexes the idle ledger. The call
/// returns once every worker has observed global completion.
pub fn run_pool(ctx: &WalkContext) {
    thread::scope(|scope| {
        for worker_id in 0..ctx.queue.worker_count() {
            scope.spawn(move || worker_loop(ctx, worker_id));
        }
    });
}

fn worker_loop(ctx: &WalkContext, worker_id: usize) {
    while let Some(task) = ctx.queue.take(worker_id) {
        expand(ctx, task);
    }
}

/// Expand one directory: enumerate children, probe each, enqueue
/// subdirectories, and credit the batch of discovered blocks to the
/// owning root in a single add.
///
/// The task owns its path; dropping it here is the end of its lifetime.
/// A directory that cannot be opened contributes no children; a child
/// that cannot be statted contributes 0. Both flag the run and keep going.
fn expand(ctx: &WalkContext, task: PendingTask) {
    let children = match list_children(&task.path) {
        Ok(children) => children,
        Err(err) => {
            ctx.status.flag(&err);
            return;
        }
    };

    let mut blocks: u64 = 0;
    for child in children {
        let child = match child {
            Ok(path) => path,
            Err(err) => {
                ctx.status.flag(&err);
                continue;
            }
        };
        match probe(&child) {
            Ok(result) => {
                blocks += result.blocks;
                if result.is_dir {
                    ctx.queue.push(PendingTask {
                        root_id: task.root_id,
                        path: child,
                    });
                }
            }
            Err(err) => ctx.status.flag(&err),
        }
    }

    ctx.totals.add(task.root_id, blocks);
}
