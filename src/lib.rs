//! Geofence Monitor: debounced enter/exit detection for circular regions
//!
//! The monitor consumes a stream of position fixes and, for each registered
//! geofence, reports exactly one event per actual boundary crossing. The
//! per-fence logic is a small pure state machine; the monitor around it owns
//! the fence registry and delivers events to callers and subscribers.
//!
//! # Core Concepts
//!
//! - **Geo**: haversine distance and validated coordinates
//! - **Registry**: immutable, insertion-ordered fence definitions
//! - **Tracker**: per-fence `Unknown`/`Inside`/`Outside` machine with debounce
//! - **Engine**: evaluates samples against every fence and emits events
//!
//! # Example
//!
//! ```rust
//! use geofence_monitor::core::{PositionSample, TransitionKind};
//! use geofence_monitor::engine::GeofenceMonitor;
//! use geofence_monitor::geo::Coordinate;
//! use geofence_monitor::registry::Fence;
//! use chrono::Utc;
//!
//! let mut monitor = GeofenceMonitor::builder()
//!     .fence(Fence::new("office", Coordinate::new(6.605874, 3.349149).unwrap(), 100.0))
//!     .debounce_samples(2)
//!     .build()
//!     .unwrap();
//!
//! let at_desk = PositionSample::at(6.605874, 3.349149, 8.0, Utc::now()).unwrap();
//! let down_the_road = PositionSample::at(6.6100, 3.3491, 8.0, Utc::now()).unwrap();
//!
//! // Two samples to settle inside, silently
//! assert!(monitor.observe(&at_desk).is_empty());
//! assert!(monitor.observe(&at_desk).is_empty());
//!
//! // Two samples outside to commit the exit
//! assert!(monitor.observe(&down_the_road).is_empty());
//! let events = monitor.observe(&down_the_road);
//! assert_eq!(events[0].kind, TransitionKind::Exited);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod geo;
pub mod registry;

// Re-export commonly used types
pub use config::{load_config, MonitorConfig, SourceOptions};
pub use core::{
    FenceState, FenceStatus, InitialEvent, PositionSample, TransitionEvent, TransitionKind,
};
pub use engine::{run_feed, GeofenceMonitor, MonitorBuilder};
pub use error::{GeofenceError, Result};
pub use geo::{distance, Coordinate};
pub use registry::{Fence, FenceRegistry};
