//! Monitoring engine: evaluates position samples against registered fences.
//!
//! This module is the "imperative shell" around the pure per-fence core. It
//! owns the registry and one tracker per fence, turns samples into
//! transition events and hands them to callers and subscribers.
//!
//! # Key Concepts
//!
//! - **Monitor**: `GeofenceMonitor` holds the registry and trackers
//! - **Builder**: `MonitorBuilder` validates settings and fences up front
//! - **Subscriptions**: callbacks invoked synchronously from `observe`
//! - **Feed**: `run_feed` drains a sample channel on a dedicated task

mod builder;
mod feed;
mod monitor;
mod subscriber;

pub use builder::MonitorBuilder;
pub use feed::{run_feed, FeedStop};
pub use monitor::GeofenceMonitor;
pub use subscriber::{EventCallback, SubscriptionId};
