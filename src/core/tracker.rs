//! Per-fence state machine with optional debounce.

use super::event::TransitionKind;
use super::status::{FenceState, FenceStatus};
use crate::error::{GeofenceError, Result};
use serde::{Deserialize, Serialize};

/// Whether the first resolution out of `Unknown` produces an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialEvent {
    /// Resolve silently; only real crossings produce events
    #[default]
    Suppress,

    /// Emit `Entered` when the first committed sample is inside
    Emit,
}

/// Tuning shared by every tracker in a monitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerSettings {
    debounce_samples: u32,
    initial_event: InitialEvent,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            debounce_samples: 1,
            initial_event: InitialEvent::Suppress,
        }
    }
}

impl TrackerSettings {
    /// Create settings; `debounce_samples` must be at least 1.
    pub fn new(debounce_samples: u32, initial_event: InitialEvent) -> Result<Self> {
        if debounce_samples == 0 {
            return Err(GeofenceError::InvalidDebounce);
        }
        Ok(Self {
            debounce_samples,
            initial_event,
        })
    }

    pub fn debounce_samples(&self) -> u32 {
        self.debounce_samples
    }

    pub fn initial_event(&self) -> InitialEvent {
        self.initial_event
    }
}

/// A candidate status that has not yet held long enough to commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingRun {
    pub candidate: FenceStatus,
    pub run: u32,
}

/// Outcome of feeding one containment result into a tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// Sample agrees with the committed status
    Unchanged,

    /// Sample disagrees, but the debounce run is not complete yet
    Pending { candidate: FenceStatus, run: u32 },

    /// First committed status after `Unknown`
    Resolved { status: FenceStatus, announce: bool },

    /// Committed crossing between `Inside` and `Outside`
    Transitioned(TransitionKind),
}

impl StepResult {
    /// The event this step emits, if any.
    pub fn emitted(&self) -> Option<TransitionKind> {
        match self {
            Self::Transitioned(kind) => Some(*kind),
            Self::Resolved {
                status: FenceStatus::Inside,
                announce: true,
            } => Some(TransitionKind::Entered),
            _ => None,
        }
    }
}

/// State machine for one fence.
///
/// Starts in `Unknown` and resolves on the first sample fed to
/// [`FenceTracker::step`]. After that, a crossing between `Inside` and
/// `Outside` is committed only once the new status has been observed for
/// `debounce_samples` consecutive samples. The pending run resets whenever
/// the raw result flips or agrees with the committed status.
///
/// # Example
///
/// ```rust
/// use geofence_monitor::core::{FenceStatus, FenceTracker, TrackerSettings, TransitionKind};
///
/// let mut tracker = FenceTracker::new("home", TrackerSettings::default());
/// assert_eq!(tracker.status(), FenceStatus::Unknown);
///
/// assert_eq!(tracker.update(true), None); // first resolution is silent
/// assert_eq!(tracker.status(), FenceStatus::Inside);
///
/// assert_eq!(tracker.update(false), Some(TransitionKind::Exited));
/// assert_eq!(tracker.update(false), None);
/// ```
#[derive(Clone, Debug)]
pub struct FenceTracker {
    fence_id: String,
    status: FenceStatus,
    pending: Option<PendingRun>,
    settings: TrackerSettings,
}

impl FenceTracker {
    /// Create a tracker in the `Unknown` state.
    pub fn new(fence_id: impl Into<String>, settings: TrackerSettings) -> Self {
        Self {
            fence_id: fence_id.into(),
            status: FenceStatus::Unknown,
            pending: None,
            settings,
        }
    }

    pub fn fence_id(&self) -> &str {
        &self.fence_id
    }

    /// Current committed status (pure)
    pub fn status(&self) -> FenceStatus {
        self.status
    }

    /// Snapshot for status queries (pure)
    pub fn state(&self) -> FenceState {
        FenceState {
            fence_id: self.fence_id.clone(),
            status: self.status,
        }
    }

    /// Candidate status still waiting for its debounce run (pure)
    pub fn pending(&self) -> Option<PendingRun> {
        self.pending
    }

    pub fn settings(&self) -> TrackerSettings {
        self.settings
    }

    /// Feed one containment result and report what happened.
    pub fn step(&mut self, is_inside: bool) -> StepResult {
        let observed = FenceStatus::from_containment(is_inside);

        if observed == self.status {
            self.pending = None;
            return StepResult::Unchanged;
        }

        // The first evaluated sample always resolves; debounce only guards crossings
        if self.status == FenceStatus::Unknown {
            self.status = observed;
            self.pending = None;
            return StepResult::Resolved {
                status: observed,
                announce: self.settings.initial_event == InitialEvent::Emit,
            };
        }

        let run = match self.pending {
            Some(pending) if pending.candidate == observed => pending.run.saturating_add(1),
            _ => 1,
        };

        if run < self.settings.debounce_samples {
            self.pending = Some(PendingRun {
                candidate: observed,
                run,
            });
            return StepResult::Pending {
                candidate: observed,
                run,
            };
        }

        self.pending = None;
        self.status = observed;

        match observed {
            FenceStatus::Inside => StepResult::Transitioned(TransitionKind::Entered),
            _ => StepResult::Transitioned(TransitionKind::Exited),
        }
    }

    /// Feed one containment result and return the emitted event kind, if any.
    pub fn update(&mut self, is_inside: bool) -> Option<TransitionKind> {
        self.step(is_inside).emitted()
    }

    /// Return to `Unknown`, dropping any pending run.
    pub fn reset(&mut self) {
        self.status = FenceStatus::Unknown;
        self.pending = None;
    }
}
