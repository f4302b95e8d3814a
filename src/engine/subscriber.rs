//! Callback subscriptions for transition events.

use crate::core::TransitionEvent;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Type alias for subscriber callbacks.
pub type EventCallback = Box<dyn FnMut(&TransitionEvent) + Send>;

/// Ordered list of subscriber callbacks.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, EventCallback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: EventCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Deliver each event to every subscriber, events outermost.
    pub(crate) fn notify(&mut self, events: &[TransitionEvent]) {
        for event in events {
            for (_, callback) in self.entries.iter_mut() {
                callback(event);
            }
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PositionSample, TransitionKind};
    use chrono::Utc;
    use std::sync::{Arc, Mutex};

    fn event(id: &str) -> TransitionEvent {
        let sample = PositionSample::at(0.0, 0.0, 1.0, Utc::now()).unwrap();
        TransitionEvent::new(id, TransitionKind::Entered, &sample)
    }

    #[test]
    fn ids_are_unique() {
        let mut subs = Subscribers::default();
        let a = subs.add(Box::new(|_| {}));
        let b = subs.add(Box::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn remove_reports_whether_found() {
        let mut subs = Subscribers::default();
        let id = subs.add(Box::new(|_| {}));
        assert!(subs.remove(id));
        assert!(!subs.remove(id));
        assert_eq!(subs.len(), 0);
    }

    #[test]
    fn notify_preserves_event_and_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subs = Subscribers::default();

        let first = Arc::clone(&log);
        subs.add(Box::new(move |e| {
            first.lock().unwrap().push(format!("1:{}", e.fence_id))
        }));
        let second = Arc::clone(&log);
        subs.add(Box::new(move |e| {
            second.lock().unwrap().push(format!("2:{}", e.fence_id))
        }));

        subs.notify(&[event("a"), event("b")]);

        assert_eq!(*log.lock().unwrap(), vec!["1:a", "2:a", "1:b", "2:b"]);
    }
}
