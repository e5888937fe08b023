/*!
 * Engine
 * Session host owning one process queue and one resource graph
 */

use crate::core::config::EngineConfig;
use crate::core::types::{BurstTime, Energy, EngineResult, Pid, ResourceId};
use crate::deadlock::{DeadlockReport, Edge, ResourceGraph};
use crate::monitoring::OperationSpan;
use crate::scheduler::{AtomicQueueStats, ProcessQueue, QueueStats, Schedule};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Point-in-time view of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub session_id: Uuid,
    pub pending: usize,
    pub recorded_processes: usize,
    pub queue: QueueStats,
}

/// Scheduling and deadlock engine for one session
///
/// The queue and the graph are independent and each sits behind its own
/// lock. Clones share state.
pub struct Engine {
    session_id: Uuid,
    config: Arc<EngineConfig>,
    queue: Arc<Mutex<ProcessQueue>>,
    graph: Arc<RwLock<ResourceGraph>>,
    // Read without the queue lock
    queue_stats: Arc<AtomicQueueStats>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let session_id = Uuid::new_v4();
        let queue = ProcessQueue::from_config(&config);
        let queue_stats = queue.stats_handle();

        info!(
            session = %session_id,
            max_queue_len = config.max_queue_len,
            allow_negative_energy = config.allow_negative_energy,
            "Engine session started"
        );

        Self {
            session_id,
            config: Arc::new(config),
            queue: Arc::new(Mutex::new(queue)),
            graph: Arc::new(RwLock::new(ResourceGraph::new())),
            queue_stats,
        }
    }

    #[inline]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register a process for the next schedule
    pub fn add_process(
        &self,
        pid: Pid,
        burst_time: BurstTime,
        energy_consumption: Energy,
    ) -> EngineResult<()> {
        let span = OperationSpan::new("add_process", &self.session_id);
        let _entered = span.enter();

        let result = self.queue.lock().add(pid, burst_time, energy_consumption);
        span.record_result(result.is_ok());
        result.map_err(Into::into)
    }

    /// Drain the queue into an energy-ascending schedule
    pub fn schedule(&self) -> Schedule {
        let span = OperationSpan::new("schedule", &self.session_id);
        let _entered = span.enter();

        let schedule = self.queue.lock().drain_in_order();
        span.record_items_processed(schedule.len());
        span.record_result(true);
        schedule
    }

    /// Overwrite the holdings of `pid`
    pub fn record_allocation<A, R>(&self, pid: Pid, allocated: A, requested: R)
    where
        A: IntoIterator,
        A::Item: Into<ResourceId>,
        R: IntoIterator,
        R::Item: Into<ResourceId>,
    {
        let span = OperationSpan::new("record_allocation", &self.session_id);
        let _entered = span.enter();

        self.graph
            .write()
            .record_allocation(pid, allocated, requested);
        span.record_result(true);
    }

    pub fn detect_deadlock(&self) -> DeadlockReport {
        let span = OperationSpan::new("detect_deadlock", &self.session_id);
        let _entered = span.enter();

        let report = self.graph.read().detect_deadlock();
        span.record_items_processed(report.cycle.len());
        span.record_result(true);
        report
    }

    /// Full resource-wait edge list
    pub fn edges(&self) -> Vec<Edge> {
        self.graph.read().edges()
    }

    /// Discard pending processes and recorded allocations
    pub fn reset(&self) {
        let span = OperationSpan::new("reset", &self.session_id);
        let _entered = span.enter();

        self.queue.lock().clear();
        self.graph.write().clear();
        info!(session = %self.session_id, "Engine session reset");
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            session_id: self.session_id,
            pending: self.queue.lock().len(),
            recorded_processes: self.graph.read().process_count(),
            queue: self.queue_stats.snapshot(),
        }
    }
}

impl Clone for Engine {
    fn clone(&self) -> Self {
        Self {
            session_id: self.session_id,
            config: Arc::clone(&self.config),
            queue: Arc::clone(&self.queue),
            graph: Arc::clone(&self.graph),
            queue_stats: Arc::clone(&self.queue_stats),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
