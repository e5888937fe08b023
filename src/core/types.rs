/*!
 * Core Types
 * Common types shared by the scheduler and the deadlock detector
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Process ID type
pub type Pid = u32;

/// Burst time in abstract time units
pub type BurstTime = u64;

/// Energy cost of running a process to completion
pub type Energy = i64;

/// Common result type for engine operations
pub type EngineResult<T> = Result<T, super::errors::EngineError>;

/// Resource identifier
///
/// # Performance
/// - Short labels (≤23 bytes, e.g. `R1`, `printer`) are stored inline without allocation
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ResourceId(SmartString);

impl ResourceId {
    #[inline]
    pub fn new(id: &str) -> Self {
        Self(SmartString::from(id))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for ResourceId {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceId {
    #[inline]
    fn from(s: String) -> Self {
        Self(SmartString::from(s))
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
