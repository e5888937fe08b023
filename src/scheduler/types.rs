/*!
 * Scheduler Types
 * Domain types for energy-ordered scheduling
 */

use crate::core::types::{BurstTime, Energy, Pid};
use serde::{Deserialize, Serialize};

/// A registered process awaiting scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,
    /// Carried for display; never consulted when ordering
    pub burst_time: BurstTime,
    pub energy_consumption: Energy,
}

impl Process {
    #[inline]
    pub const fn new(pid: Pid, burst_time: BurstTime, energy_consumption: Energy) -> Self {
        Self {
            pid,
            burst_time,
            energy_consumption,
        }
    }
}

/// Result of draining the queue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// `(pid, energy_consumption)` in execution order
    pub order: Vec<(Pid, Energy)>,
    pub total_energy: Energy,
}

impl Schedule {
    /// Pids in execution order
    pub fn pids(&self) -> Vec<Pid> {
        self.order.iter().map(|&(pid, _)| pid).collect()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }
}

/// Queue statistics snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueStats {
    pub total_added: u64,
    pub total_rejected: u64,
    pub total_drained: u64,
    pub drains: u64,
    pub energy_drained: Energy,
    pub pending: usize,
}
