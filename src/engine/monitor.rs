//! Geofence monitor that evaluates samples against every registered fence.

use super::builder::MonitorBuilder;
use super::subscriber::{EventCallback, SubscriptionId, Subscribers};
use crate::config::MonitorConfig;
use crate::core::{
    FenceState, FenceTracker, PositionSample, StepResult, TrackerSettings, TransitionEvent,
};
use crate::error::{GeofenceError, Result};
use crate::registry::{Fence, FenceRegistry};
use tracing::{debug, info, trace};
use uuid::Uuid;

/// Monitoring engine: one registry, one tracker per fence.
///
/// Trackers are stored in registry order, so `trackers[i]` always belongs
/// to `registry.get_all()[i]`.
///
/// `observe` takes `&mut self`, so evaluation is serialized per instance.
/// Separate monitors share nothing.
///
/// # Example
///
/// ```rust
/// use geofence_monitor::core::{FenceStatus, PositionSample, TransitionKind};
/// use geofence_monitor::engine::GeofenceMonitor;
/// use geofence_monitor::geo::Coordinate;
/// use geofence_monitor::registry::Fence;
/// use chrono::Utc;
///
/// let mut monitor = GeofenceMonitor::builder()
///     .fence(Fence::new("origin", Coordinate::new(0.0, 0.0).unwrap(), 1000.0))
///     .build()
///     .unwrap();
///
/// let inside = PositionSample::at(0.0, 0.0, 5.0, Utc::now()).unwrap();
/// let outside = PositionSample::at(10.0, 10.0, 5.0, Utc::now()).unwrap();
///
/// assert!(monitor.observe(&inside).is_empty());
/// let events = monitor.observe(&outside);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].kind, TransitionKind::Exited);
/// assert_eq!(monitor.current_status("origin").unwrap().status, FenceStatus::Outside);
/// ```
#[derive(Debug)]
pub struct GeofenceMonitor {
    session_id: Uuid,
    registry: FenceRegistry,
    trackers: Vec<FenceTracker>,
    settings: TrackerSettings,
    subscribers: Subscribers,
}

impl Default for GeofenceMonitor {
    fn default() -> Self {
        Self::new(TrackerSettings::default())
    }
}

impl GeofenceMonitor {
    /// Create a monitor with no fences.
    pub fn new(settings: TrackerSettings) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            registry: FenceRegistry::new(),
            trackers: Vec::new(),
            settings,
            subscribers: Subscribers::default(),
        }
    }

    pub fn builder() -> MonitorBuilder {
        MonitorBuilder::new()
    }

    /// Build a monitor from a loaded configuration.
    pub fn from_config(config: &MonitorConfig) -> Result<Self> {
        MonitorBuilder::new()
            .fences(config.fences.clone())
            .debounce_samples(config.debounce_samples)
            .initial_event(config.initial_event)
            .build()
    }

    /// Identifier attached to this monitor's log records.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn settings(&self) -> TrackerSettings {
        self.settings
    }

    pub fn registry(&self) -> &FenceRegistry {
        &self.registry
    }

    /// Replace the registered fences.
    ///
    /// Every fence gets a fresh tracker in `Unknown`; previous tracker state
    /// is discarded. If the fences fail validation the existing registration
    /// is left untouched. Subscribers are kept.
    pub fn register_fences(&mut self, fences: impl IntoIterator<Item = Fence>) -> Result<()> {
        let registry = FenceRegistry::load(fences)?;

        let trackers = registry
            .iter()
            .map(|fence| FenceTracker::new(fence.id.clone(), self.settings))
            .collect();

        self.registry = registry;
        self.trackers = trackers;

        info!(
            session = %self.session_id,
            fences = self.registry.len(),
            debounce_samples = self.settings.debounce_samples(),
            "Registered fences"
        );
        Ok(())
    }

    /// Evaluate one sample against every fence.
    ///
    /// Returns the events committed by this sample in registry order, after
    /// delivering them to subscribers. The sample is not retained.
    pub fn observe(&mut self, sample: &PositionSample) -> Vec<TransitionEvent> {
        let mut events = Vec::new();

        for (fence, tracker) in self.registry.iter().zip(self.trackers.iter_mut()) {
            let is_inside = fence.contains(sample.coordinate());
            let result = tracker.step(is_inside);

            match result {
                StepResult::Pending { candidate, run } => {
                    trace!(
                        session = %self.session_id,
                        fence = %fence.id,
                        candidate = %candidate,
                        run,
                        "Debounce run pending"
                    );
                }
                StepResult::Resolved { status, .. } => {
                    debug!(
                        session = %self.session_id,
                        fence = %fence.id,
                        status = %status,
                        "Fence status resolved"
                    );
                }
                StepResult::Transitioned(kind) => {
                    debug!(
                        session = %self.session_id,
                        fence = %fence.id,
                        kind = %kind,
                        accuracy_meters = sample.accuracy_meters(),
                        "Fence transition"
                    );
                }
                StepResult::Unchanged => {}
            }

            if let Some(kind) = result.emitted() {
                events.push(TransitionEvent::new(fence.id.clone(), kind, sample));
            }
        }

        self.subscribers.notify(&events);
        events
    }

    /// Status of one fence; fails with `UnknownFenceId` if not registered.
    pub fn current_status(&self, fence_id: &str) -> Result<FenceState> {
        self.tracker(fence_id)
            .map(FenceTracker::state)
            .ok_or_else(|| GeofenceError::UnknownFenceId(fence_id.to_string()))
    }

    /// Status of every fence in registry order.
    pub fn statuses(&self) -> Vec<FenceState> {
        self.trackers.iter().map(FenceTracker::state).collect()
    }

    /// Tracker for one fence, for debounce introspection.
    pub fn tracker(&self, fence_id: &str) -> Option<&FenceTracker> {
        self.registry
            .position(fence_id)
            .and_then(|position| self.trackers.get(position))
    }

    /// Return every tracker to `Unknown`, keeping fences and subscribers.
    pub fn reset(&mut self) {
        for tracker in self.trackers.iter_mut() {
            tracker.reset();
        }
        debug!(session = %self.session_id, "Trackers reset");
    }

    /// Register a callback invoked for every event `observe` produces.
    ///
    /// Callbacks run synchronously inside `observe`, in subscription order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&TransitionEvent) + Send + 'static,
    {
        let callback: EventCallback = Box::new(callback);
        self.subscribers.add(callback)
    }

    /// Remove a callback. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
