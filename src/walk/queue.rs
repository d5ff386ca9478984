//! Shared work queue with distributed termination detection.
//!
//! Pending-directory tasks, the wakeup permit count, and the per-worker idle
//! ledger all live under a single lock so that "the queue is empty" and
//! "every worker is idle" are one atomic observation. That observation is
//! the whole termination argument: a worker can only produce work while it
//! is marked non-idle, so once a worker sees all peers idle over an empty
//! queue, no producer can be mid-flight and the walk is globally complete.

use std::path::PathBuf;

use parking_lot::{Condvar, Mutex};

/// One directory discovered but not yet expanded, tagged with the input
/// root it belongs to. Owned by the queue while enqueued and by the
/// expanding worker afterwards; dropped once fully expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTask {
    /// Index of the originating input path.
    pub root_id: usize,
    /// Directory awaiting expansion.
    pub path: PathBuf,
}

#[derive(Debug)]
struct QueueState {
    tasks: Vec<PendingTask>,
    /// Counting-semaphore permits. Equals `tasks.len()` at every instant
    /// observed under the lock, until the done broadcast adds one permit
    /// per worker over an empty queue.
    permits: usize,
    idle: Vec<bool>,
    idle_count: usize,
    done: bool,
}

/// Growable pool of pending directories shared by all workers.
///
/// `push` never blocks; `take` blocks until a task is available or until
/// some worker declares global completion.
#[derive(Debug)]
pub struct WorkQueue {
    workers: usize,
    shared: Mutex<QueueState>,
    available: Condvar,
}

impl WorkQueue {
    /// Create a queue serving `workers` symmetric consumers.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        let workers = workers.max(1);
        Self {
            workers,
            shared: Mutex::new(QueueState {
                tasks: Vec::new(),
                permits: 0,
                idle: vec![false; workers],
                idle_count: 0,
                done: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Number of workers this queue was sized for.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Append a task and post one availability permit.
    pub fn push(&self, task: PendingTask) {
        let mut state = self.shared.lock();
        state.tasks.push(task);
        state.permits += 1;
        self.available.notify_one();
    }

    /// Whether any tasks are currently enqueued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().tasks.is_empty()
    }

    /// Fetch the next task for `worker_id`, blocking while the queue is
    /// empty but producers remain. Returns `None` exactly once per worker,
    /// when the walk is globally complete.
    ///
    /// Protocol, all under the shared lock:
    /// 1. Mark self idle. If the queue is empty and every worker is idle,
    ///    this worker is the declarer: set the done flag, post one permit
    ///    per worker, wake everyone, and exit.
    /// 2. Otherwise wait for a permit.
    /// 3. On winning a permit with the walk still live, mark self non-idle
    ///    and pop the most recently pushed task (stack order; sibling order
    ///    is unspecified).
    pub fn take(&self, worker_id: usize) -> Option<PendingTask> {
        let mut state = self.shared.lock();
        loop {
            if !state.idle[worker_id] {
                state.idle[worker_id] = true;
                state.idle_count += 1;
            }

            if state.done {
                return None;
            }

            if state.tasks.is_empty() && state.idle_count == self.workers {
                // Last worker standing over an empty queue: declare global
                // completion and wake every blocked peer so it can observe
                // the flag instead of waiting forever.
                state.done = true;
                state.permits += self.workers;
                self.available.notify_all();
                return None;
            }

            if state.permits == 0 {
                self.available.wait(&mut state);
                continue;
            }

            state.permits -= 1;
            let Some(task) = state.tasks.pop() else {
                // Unreachable while the permit invariant holds; re-check
                // rather than panic if it ever does not.
                continue;
            };
            state.idle[worker_id] = false;
            state.idle_count -= 1;
            return Some(task);
        }
    }
}
