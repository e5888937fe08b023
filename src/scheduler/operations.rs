/*!
 * Scheduler Core Operations
 * Add, peek, and drain operations
 */

use super::entry::Entry;
use super::types::{Process, Schedule};
use super::ProcessQueue;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{BurstTime, Energy, Pid};
use tracing::{debug, info};

impl ProcessQueue {
    /// Add process to the queue
    ///
    /// Duplicate pids are queued independently. A rejected add leaves the
    /// queue untouched.
    pub fn add(
        &mut self,
        pid: Pid,
        burst_time: BurstTime,
        energy_consumption: Energy,
    ) -> SchedulerResult<()> {
        if energy_consumption < 0 && !self.allow_negative_energy {
            self.stats.inc_rejected();
            return Err(SchedulerError::NegativeEnergy {
                pid,
                energy: energy_consumption,
            });
        }

        if self.heap.len() >= self.max_len {
            self.stats.inc_rejected();
            return Err(SchedulerError::QueueFull(self.max_len));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap
            .push(Entry::new(Process::new(pid, burst_time, energy_consumption), seq));

        self.stats.inc_added();
        info!(
            pid,
            burst_time, energy_consumption, "Process added to scheduler"
        );
        Ok(())
    }

    /// Drain every pending process in ascending energy order
    ///
    /// Destructive: the queue is empty afterwards and a second call yields an
    /// empty schedule with zero total energy.
    pub fn drain_in_order(&mut self) -> Schedule {
        let mut order = Vec::with_capacity(self.heap.len());
        let mut total_energy: Energy = 0;

        while let Some(entry) = self.heap.pop() {
            let process = entry.process;
            total_energy = total_energy.saturating_add(process.energy_consumption);
            order.push((process.pid, process.energy_consumption));
        }

        self.stats.record_drain(order.len(), total_energy);

        if order.is_empty() {
            debug!("Drain requested on empty queue");
        } else {
            info!(
                processes = order.len(),
                total_energy, "Schedule computed"
            );
        }

        Schedule {
            order,
            total_energy,
        }
    }

    /// Next process to run without removing it
    pub fn peek(&self) -> Option<Process> {
        self.heap.peek().map(|entry| entry.process)
    }

    /// Discard all pending processes
    pub fn clear(&mut self) {
        let discarded = self.heap.len();
        self.heap.clear();
        self.stats.reset_pending();
        if discarded > 0 {
            info!(discarded, "Process queue cleared");
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
