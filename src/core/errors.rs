/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Energy, Pid};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Process {pid} has negative energy consumption ({energy})")]
    #[diagnostic(
        code(scheduler::negative_energy),
        help("Energy consumption must be zero or positive. Set ENERGY_ALLOW_NEGATIVE=1 to accept it.")
    )]
    NegativeEnergy { pid: Pid, energy: Energy },

    #[error("Scheduler queue full: capacity {0}")]
    #[diagnostic(
        code(scheduler::queue_full),
        help("Too many pending processes. Run the scheduler to drain the queue.")
    )]
    QueueFull(usize),
}

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Unified engine error type with miette diagnostics
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    #[diagnostic(
        code(engine::invalid_input),
        help("Please enter integers for pid, burst time and energy. Type `help` for usage.")
    )]
    InvalidInput(String),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(engine::config),
        help("Check the ENERGY_* environment variables and the ENERGY_CONFIG file.")
    )]
    Config(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(engine::io))]
    Io(String),
}

impl EngineError {
    /// Errors caused by operator input rather than engine state
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Scheduler(_))
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_error_display() {
        let err = SchedulerError::NegativeEnergy { pid: 7, energy: -3 };
        assert_eq!(
            err.to_string(),
            "Process 7 has negative energy consumption (-3)"
        );
        assert_eq!(
            SchedulerError::QueueFull(4).to_string(),
            "Scheduler queue full: capacity 4"
        );
    }

    #[test]
    fn test_engine_error_serialization() {
        let err = EngineError::InvalidInput("pid must be an integer".into());
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"error_type\":\"invalid_input\""));

        let back: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_user_error_classification() {
        assert!(EngineError::InvalidInput("x".into()).is_user_error());
        assert!(EngineError::from(SchedulerError::QueueFull(1)).is_user_error());
        assert!(!EngineError::Config("bad".into()).is_user_error());
    }
}
