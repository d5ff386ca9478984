//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use mdu::prelude::*;
//! ```

// Core
pub use crate::core::errors::{MduError, Result};

// Walk
pub use crate::walk::driver::{Driver, RootTotal, WalkOptions, WalkReport};
pub use crate::walk::pool::WalkContext;
pub use crate::walk::probe::{ProbeResult, probe};
pub use crate::walk::queue::{PendingTask, WorkQueue};
pub use crate::walk::status::RunStatus;
pub use crate::walk::totals::TotalsTable;
