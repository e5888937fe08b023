/*!
 * Scheduler Statistics
 */

use super::atomic_stats::AtomicQueueStats;
use super::types::QueueStats;
use super::ProcessQueue;
use std::sync::Arc;

impl ProcessQueue {
    /// Get queue statistics (lock-free snapshot)
    pub fn stats(&self) -> QueueStats {
        self.stats.snapshot()
    }

    /// Shared handle to the live counters
    pub fn stats_handle(&self) -> Arc<AtomicQueueStats> {
        Arc::clone(&self.stats)
    }
}
