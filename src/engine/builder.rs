//! Builder for constructing geofence monitors.

use super::monitor::GeofenceMonitor;
use crate::core::{InitialEvent, TrackerSettings};
use crate::error::Result;
use crate::registry::Fence;

/// Builder for constructing monitors with a fluent API.
///
/// Validation happens in [`MonitorBuilder::build`]: a zero debounce count
/// fails with `InvalidDebounce`, bad fences fail the same way
/// `register_fences` does.
#[derive(Clone, Debug)]
pub struct MonitorBuilder {
    fences: Vec<Fence>,
    debounce_samples: u32,
    initial_event: InitialEvent,
}

impl MonitorBuilder {
    /// Create a new builder (no fences, no debounce, silent first resolution).
    pub fn new() -> Self {
        Self {
            fences: Vec::new(),
            debounce_samples: 1,
            initial_event: InitialEvent::Suppress,
        }
    }

    /// Add a single fence.
    pub fn fence(mut self, fence: Fence) -> Self {
        self.fences.push(fence);
        self
    }

    /// Add multiple fences at once.
    pub fn fences(mut self, fences: impl IntoIterator<Item = Fence>) -> Self {
        self.fences.extend(fences);
        self
    }

    /// Consecutive agreeing samples required before a transition commits.
    pub fn debounce_samples(mut self, samples: u32) -> Self {
        self.debounce_samples = samples;
        self
    }

    /// Whether the first resolution out of `Unknown` emits an event.
    pub fn initial_event(mut self, policy: InitialEvent) -> Self {
        self.initial_event = policy;
        self
    }

    /// Build the monitor.
    pub fn build(self) -> Result<GeofenceMonitor> {
        let settings = TrackerSettings::new(self.debounce_samples, self.initial_event)?;
        let mut monitor = GeofenceMonitor::new(settings);
        monitor.register_fences(self.fences)?;
        Ok(monitor)
    }
}

impl Default for MonitorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeofenceError;
    use crate::geo::Coordinate;

    fn fence(id: &str) -> Fence {
        Fence::new(id, Coordinate::new(0.0, 0.0).unwrap(), 100.0)
    }

    #[test]
    fn builder_defaults() {
        let monitor = MonitorBuilder::new().build().unwrap();
        assert_eq!(monitor.settings(), TrackerSettings::default());
        assert!(monitor.registry().is_empty());
    }

    #[test]
    fn builder_rejects_zero_debounce() {
        let result = MonitorBuilder::new().debounce_samples(0).build();
        assert!(matches!(result, Err(GeofenceError::InvalidDebounce)));
    }

    #[test]
    fn builder_rejects_duplicate_fences() {
        let result = MonitorBuilder::new()
            .fence(fence("a"))
            .fences(vec![fence("a")])
            .build();
        assert!(matches!(result, Err(GeofenceError::DuplicateFenceId(_))));
    }

    #[test]
    fn fluent_api_builds_monitor() {
        let monitor = MonitorBuilder::new()
            .fence(fence("a"))
            .fences(vec![fence("b"), fence("c")])
            .debounce_samples(3)
            .initial_event(InitialEvent::Emit)
            .build()
            .unwrap();

        assert_eq!(monitor.registry().len(), 3);
        assert_eq!(monitor.settings().debounce_samples(), 3);
        assert_eq!(monitor.settings().initial_event(), InitialEvent::Emit);
    }
}
