//! Core fence state types and logic.
//!
//! This module contains the pure per-fence machinery:
//! - Containment status via `FenceStatus`
//! - The debounced per-fence state machine `FenceTracker`
//! - Samples in and transition events out
//!
//! Nothing here knows about other fences, subscribers or I/O.

mod event;
mod status;
mod tracker;

pub use event::{PositionSample, TransitionEvent, TransitionKind};
pub use status::{FenceState, FenceStatus};
pub use tracker::{FenceTracker, InitialEvent, PendingRun, StepResult, TrackerSettings};
