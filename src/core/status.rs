//! Containment status of a single fence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Containment status tracked for each fence.
///
/// `Unknown` is the initial value before any sample has been committed.
/// Once resolved, a fence only ever alternates between `Inside` and
/// `Outside`; it never returns to `Unknown` except through an explicit
/// reset of the monitor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum FenceStatus {
    #[default]
    Unknown,
    Inside,
    Outside,
}

impl FenceStatus {
    /// Map the outcome of a containment test to a resolved status.
    pub fn from_containment(is_inside: bool) -> Self {
        if is_inside {
            Self::Inside
        } else {
            Self::Outside
        }
    }

    /// Get the status name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Inside => "Inside",
            Self::Outside => "Outside",
        }
    }

    /// Check whether at least one sample has been committed.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for FenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of one fence's status, as returned by status queries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenceState {
    pub fence_id: String,
    pub status: FenceStatus,
}
