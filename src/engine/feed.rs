//! Async evaluation loop draining a sample queue into a monitor.

use super::monitor::GeofenceMonitor;
use crate::core::{PositionSample, TransitionEvent};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Why a feed loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedStop {
    /// The position source closed its sender
    SourceClosed,

    /// The event receiver was dropped
    ConsumerGone,
}

/// Run the single-writer evaluation loop.
///
/// Owns `monitor` for the duration of the loop, feeding every sample from
/// `samples` through [`GeofenceMonitor::observe`] and forwarding resulting
/// events to `events`. Sending waits for channel capacity, so a slow
/// consumer slows sample intake. Returns the monitor once the source closes
/// or the consumer goes away.
///
/// # Example
///
/// ```rust
/// use geofence_monitor::core::{PositionSample, TransitionKind};
/// use geofence_monitor::engine::{run_feed, FeedStop, GeofenceMonitor};
/// use geofence_monitor::geo::Coordinate;
/// use geofence_monitor::registry::Fence;
/// use chrono::Utc;
/// use tokio::sync::mpsc;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let monitor = GeofenceMonitor::builder()
///     .fence(Fence::new("origin", Coordinate::new(0.0, 0.0).unwrap(), 1000.0))
///     .build()
///     .unwrap();
///
/// let (sample_tx, sample_rx) = mpsc::channel(16);
/// let (event_tx, mut event_rx) = mpsc::channel(16);
/// let task = tokio::spawn(run_feed(monitor, sample_rx, event_tx));
///
/// sample_tx.send(PositionSample::at(0.0, 0.0, 5.0, Utc::now()).unwrap()).await.unwrap();
/// sample_tx.send(PositionSample::at(5.0, 5.0, 5.0, Utc::now()).unwrap()).await.unwrap();
/// drop(sample_tx);
///
/// let event = event_rx.recv().await.unwrap();
/// assert_eq!(event.kind, TransitionKind::Exited);
///
/// let (_monitor, stop) = task.await.unwrap();
/// assert_eq!(stop, FeedStop::SourceClosed);
/// # });
/// ```
pub async fn run_feed(
    mut monitor: GeofenceMonitor,
    mut samples: mpsc::Receiver<PositionSample>,
    events: mpsc::Sender<TransitionEvent>,
) -> (GeofenceMonitor, FeedStop) {
    let session = monitor.session_id();
    debug!(session = %session, "Feed started");

    while let Some(sample) = samples.recv().await {
        for event in monitor.observe(&sample) {
            if events.send(event).await.is_err() {
                warn!(session = %session, "Event consumer dropped, stopping feed");
                return (monitor, FeedStop::ConsumerGone);
            }
        }
    }

    debug!(session = %session, "Position source closed, stopping feed");
    (monitor, FeedStop::SourceClosed)
}
