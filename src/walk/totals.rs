//! Per-root accumulation of discovered allocation sizes.

use parking_lot::Mutex;

/// One block counter per input root, mutated under a single mutex.
///
/// Workers only ever add; no read access exists until the pool has joined,
/// so readers never need to synchronize with writers. Addition is
/// commutative, which is why sibling subtrees need no ordering at all.
#[derive(Debug)]
pub struct TotalsTable {
    slots: Mutex<Vec<u64>>,
}

impl TotalsTable {
    /// Create a table with `roots` zeroed counters.
    #[must_use]
    pub fn new(roots: usize) -> Self {
        Self {
            slots: Mutex::new(vec![0; roots]),
        }
    }

    /// Number of root slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    /// Whether the table has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    /// Add `blocks` to the counter owned by `root_id`. Out-of-range ids are
    /// ignored; the driver only hands out ids it allocated.
    pub fn add(&self, root_id: usize, blocks: u64) {
        if let Some(slot) = self.slots.lock().get_mut(root_id) {
            *slot = slot.saturating_add(blocks);
        }
    }

    /// Consume the table after all workers have joined, yielding the final
    /// per-root block totals in root order.
    #[must_use]
    pub fn into_totals(self) -> Vec<u64> {
        self.slots.into_inner()
    }
}
