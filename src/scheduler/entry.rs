/*!
 * Scheduler Entry Types
 * Heap entries with an explicit energy-first ordering key
 */

use super::types::Process;
use crate::core::types::Energy;
use std::cmp::Ordering;

/// Queued process plus its insertion sequence
#[derive(Debug, Clone)]
pub(super) struct Entry {
    pub process: Process,
    pub seq: u64,
}

impl Entry {
    pub fn new(process: Process, seq: u64) -> Self {
        Self { process, seq }
    }

    /// Ordering key: lower energy first, then earlier insertion
    #[inline(always)]
    pub fn key(&self) -> (Energy, u64) {
        (self.process.energy_consumption, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so reverse the key to pop the minimum
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
