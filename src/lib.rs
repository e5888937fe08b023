/*!
 * Energy Scheduler Library
 * Energy-ordered process scheduling and resource deadlock detection
 */

pub mod cli;
pub mod core;
pub mod deadlock;
pub mod engine;
pub mod monitoring;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    BurstTime, Energy, EngineConfig, EngineError, EngineResult, Pid, Render, ResourceId,
    SchedulerError, SchedulerResult,
};
pub use deadlock::{DeadlockReport, Edge, Holdings, Node, ResourceGraph};
pub use engine::{Engine, EngineSnapshot};
pub use monitoring::init_tracing;
pub use scheduler::{Process, ProcessQueue, QueueStats, Schedule};
