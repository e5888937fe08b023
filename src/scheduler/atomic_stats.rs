/*!
 * Lock-Free Queue Statistics
 * Atomic counters readable without taking the queue lock
 */

use super::types::QueueStats;
use crate::core::types::Energy;
use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};

/// Atomic queue statistics
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - All operations use relaxed ordering
#[repr(C, align(64))]
#[derive(Debug, Default)]
pub struct AtomicQueueStats {
    total_added: AtomicU64,
    total_rejected: AtomicU64,
    total_drained: AtomicU64,
    drains: AtomicU64,
    energy_drained: AtomicI64,
    pending: AtomicUsize,
}

impl AtomicQueueStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hot path - called on every successful add
    #[inline(always)]
    pub fn inc_added(&self) {
        self.total_added.fetch_add(1, Ordering::Relaxed);
        self.pending.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_rejected(&self) {
        self.total_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed drain of `count` processes
    #[inline]
    pub fn record_drain(&self, count: usize, energy: Energy) {
        self.drains.fetch_add(1, Ordering::Relaxed);
        self.total_drained.fetch_add(count as u64, Ordering::Relaxed);
        self.pending.fetch_sub(count, Ordering::Relaxed);
        // Saturate instead of wrapping on pathological totals
        let _ = self
            .energy_drained
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(current.saturating_add(energy))
            });
    }

    /// Zero the pending gauge when the queue is discarded without draining
    #[inline]
    pub fn reset_pending(&self) {
        self.pending.store(0, Ordering::Relaxed);
    }

    /// Individual counters are exact; the set may be torn under concurrent updates
    #[inline]
    pub fn snapshot(&self) -> QueueStats {
        QueueStats {
            total_added: self.total_added.load(Ordering::Relaxed),
            total_rejected: self.total_rejected.load(Ordering::Relaxed),
            total_drained: self.total_drained.load(Ordering::Relaxed),
            drains: self.drains.load(Ordering::Relaxed),
            energy_drained: self.energy_drained.load(Ordering::Relaxed),
            pending: self.pending.load(Ordering::Relaxed),
        }
    }
}
