//! Concurrent disk-usage walk: size probing, directory listing, the shared
//! work queue with distributed termination detection, per-root accumulation,
//! the worker pool, and the driver that ties them together.

pub mod driver;
pub mod listing;
pub mod pool;
pub mod probe;
pub mod queue;
pub mod status;
pub mod totals;
