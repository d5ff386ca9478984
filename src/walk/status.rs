//! Shared run-error indicator.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::errors::MduError;

/// Set-once degradation flag shared by the driver and all workers.
///
/// Filesystem errors never abort the run; they are logged with the
/// offending path and leave this flag raised so the process can exit
/// non-zero as an advisory signal that some total was undercounted.
#[derive(Debug, Default)]
pub struct RunStatus {
    degraded: AtomicBool,
}

impl RunStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log a non-fatal error to stderr and mark the run degraded.
    pub fn flag(&self, err: &MduError) {
        eprintln!("mdu: {err}");
        self.degraded.store(true, Ordering::SeqCst);
    }

    /// Whether any error was flagged during the run.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::SeqCst)
    }
}
