/*!
 * Energy Scheduler
 * Pending process queue drained in ascending energy order
 */

use crate::core::config::EngineConfig;
use crate::core::limits::{DEFAULT_ALLOW_NEGATIVE_ENERGY, DEFAULT_MAX_QUEUE_LEN};
use std::collections::BinaryHeap;
use std::sync::Arc;
use tracing::info;

mod atomic_stats;
mod entry;
mod operations;
mod stats;
pub mod types;

pub use atomic_stats::AtomicQueueStats;
pub use types::{Process, QueueStats, Schedule};

use entry::Entry;

/// Energy-ordered process queue
///
/// Processes are drained lowest-energy first; equal energies drain in the
/// order they were added. Burst time is carried but never consulted.
#[derive(Debug)]
pub struct ProcessQueue {
    // Min-heap by (energy, seq) - O(log n) operations
    heap: BinaryHeap<Entry>,

    // Insertion counter for the stable tie-break
    next_seq: u64,

    max_len: usize,
    allow_negative_energy: bool,

    // Shared so hosts can read counters without locking the queue
    stats: Arc<AtomicQueueStats>,
}

impl ProcessQueue {
    /// Create a queue with default limits
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_QUEUE_LEN, DEFAULT_ALLOW_NEGATIVE_ENERGY)
    }

    /// Create a queue with explicit capacity and negative-energy policy
    pub fn with_limits(max_len: usize, allow_negative_energy: bool) -> Self {
        info!(
            max_len,
            allow_negative_energy, "Process queue initialized"
        );

        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            max_len,
            allow_negative_energy,
            stats: Arc::new(AtomicQueueStats::new()),
        }
    }

    /// Create a queue from engine configuration
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_limits(config.max_queue_len, config.allow_negative_energy)
    }
}

impl Default for ProcessQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SchedulerError;

    #[test]
    fn test_energy_order() {
        let mut queue = ProcessQueue::new();

        queue.add(1, 5, 30).unwrap();
        queue.add(2, 5, 10).unwrap();
        queue.add(3, 5, 20).unwrap();

        let schedule = queue.drain_in_order();
        assert_eq!(schedule.pids(), vec![2, 3, 1]);
        assert_eq!(schedule.total_energy, 60);
    }

    #[test]
    fn test_drain_is_destructive() {
        let mut queue = ProcessQueue::new();
        queue.add(1, 5, 30).unwrap();

        assert_eq!(queue.drain_in_order().len(), 1);
        assert!(queue.is_empty());

        let second = queue.drain_in_order();
        assert!(second.is_empty());
        assert_eq!(second.total_energy, 0);
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = ProcessQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.drain_in_order(), Schedule::default());
    }

    #[test]
    fn test_duplicate_pids_are_kept() {
        let mut queue = ProcessQueue::new();
        queue.add(7, 1, 5).unwrap();
        queue.add(7, 2, 3).unwrap();

        let schedule = queue.drain_in_order();
        assert_eq!(schedule.order, vec![(7, 3), (7, 5)]);
    }

    #[test]
    fn test_ties_drain_in_insertion_order() {
        let mut queue = ProcessQueue::new();
        for pid in [4, 9, 1, 6] {
            queue.add(pid, 1, 15).unwrap();
        }
        assert_eq!(queue.drain_in_order().pids(), vec![4, 9, 1, 6]);
    }

    #[test]
    fn test_negative_energy_rejected_by_default() {
        let mut queue = ProcessQueue::new();
        let err = queue.add(1, 5, -1).unwrap_err();
        assert_eq!(err, SchedulerError::NegativeEnergy { pid: 1, energy: -1 });
        assert!(queue.is_empty());
        assert_eq!(queue.stats().total_rejected, 1);
    }

    #[test]
    fn test_negative_energy_allowed_when_configured() {
        let mut queue = ProcessQueue::with_limits(16, true);
        queue.add(1, 5, 10).unwrap();
        queue.add(2, 5, -4).unwrap();

        let schedule = queue.drain_in_order();
        assert_eq!(schedule.pids(), vec![2, 1]);
        assert_eq!(schedule.total_energy, 6);
    }

    #[test]
    fn test_capacity_limit() {
        let mut queue = ProcessQueue::with_limits(2, false);
        queue.add(1, 1, 1).unwrap();
        queue.add(2, 1, 2).unwrap();

        assert_eq!(queue.add(3, 1, 3), Err(SchedulerError::QueueFull(2)));
        assert_eq!(queue.len(), 2);

        // Draining frees capacity again
        queue.drain_in_order();
        assert!(queue.add(3, 1, 3).is_ok());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut queue = ProcessQueue::new();
        queue.add(1, 8, 30).unwrap();
        queue.add(2, 4, 10).unwrap();

        assert_eq!(queue.peek(), Some(Process::new(2, 4, 10)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_statistics() {
        let mut queue = ProcessQueue::new();
        queue.add(1, 5, 30).unwrap();
        queue.add(2, 5, 10).unwrap();
        queue.drain_in_order();
        queue.drain_in_order();

        let stats = queue.stats();
        assert_eq!(stats.total_added, 2);
        assert_eq!(stats.total_drained, 2);
        assert_eq!(stats.drains, 2);
        assert_eq!(stats.energy_drained, 40);
        assert_eq!(stats.pending, 0);
    }
}
