/*!
 * System Limits and Constants
 *
 * Defaults for the engine configuration and console front end.
 */

// =============================================================================
// SCHEDULER LIMITS
// =============================================================================

/// Default capacity of the pending process queue
/// Bounds memory held by a session that never drains
pub const DEFAULT_MAX_QUEUE_LEN: usize = 65_536;

/// Negative energy is rejected unless explicitly enabled
pub const DEFAULT_ALLOW_NEGATIVE_ENERGY: bool = false;

// =============================================================================
// CONSOLE LIMITS
// =============================================================================

/// Longest accepted operator line (bytes)
/// Longer lines are rejected as invalid input
pub const MAX_COMMAND_LINE_LEN: usize = 4096;

// =============================================================================
// ENVIRONMENT
// =============================================================================

pub const ENV_ALLOW_NEGATIVE: &str = "ENERGY_ALLOW_NEGATIVE";
pub const ENV_MAX_QUEUE: &str = "ENERGY_MAX_QUEUE";
pub const ENV_OUTPUT: &str = "ENERGY_OUTPUT";
pub const ENV_CONFIG_PATH: &str = "ENERGY_CONFIG";
pub const ENV_TRACE_JSON: &str = "ENERGY_TRACE_JSON";
