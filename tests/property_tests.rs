//! Property-based tests for distance math and the fence tracker.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use geofence_monitor::core::{FenceStatus, FenceTracker, InitialEvent, TrackerSettings};
use geofence_monitor::engine::GeofenceMonitor;
use geofence_monitor::geo::{distance, Coordinate};
use geofence_monitor::registry::Fence;
use geofence_monitor::PositionSample;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_coordinate()(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }
}

fn tracker(debounce: u32) -> FenceTracker {
    FenceTracker::new(
        "fence",
        TrackerSettings::new(debounce, InitialEvent::Suppress).unwrap(),
    )
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in arbitrary_coordinate()) {
        prop_assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in arbitrary_coordinate(), b in arbitrary_coordinate()) {
        let ab = distance(&a, &b);
        let ba = distance(&b, &a);
        prop_assert!((ab - ba).abs() <= 1e-6 * ab.max(1.0));
    }

    #[test]
    fn distance_is_positive_for_distinct_points(
        a in arbitrary_coordinate(),
        b in arbitrary_coordinate(),
    ) {
        // Longitude is meaningless at the poles, and +/-180 name the same meridian
        let dlat = (a.latitude - b.latitude).abs();
        let dlon = (a.longitude - b.longitude).abs();
        let same_meridian = dlon <= 1e-6 || dlon >= 360.0 - 1e-6;
        prop_assume!(dlat > 1e-6 || (a.latitude.abs() < 90.0 && !same_meridian));

        prop_assert!(distance(&a, &b) > 0.0);
    }

    #[test]
    fn distance_is_finite_and_non_negative(a in arbitrary_coordinate(), b in arbitrary_coordinate()) {
        let d = distance(&a, &b);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
    }

    #[test]
    fn distance_satisfies_triangle_inequality(
        a in arbitrary_coordinate(),
        b in arbitrary_coordinate(),
        c in arbitrary_coordinate(),
    ) {
        let direct = distance(&a, &c);
        let detour = distance(&a, &b) + distance(&b, &c);
        prop_assert!(direct <= detour + 1e-6 * detour.max(1.0));
    }

    #[test]
    fn containment_matches_radius_threshold(
        center in arbitrary_coordinate(),
        point in arbitrary_coordinate(),
        radius in 1.0f64..5_000_000.0,
    ) {
        let fence = Fence::new("f", center, radius);
        prop_assert_eq!(fence.contains(&point), distance(&point, &center) <= radius);
    }

    #[test]
    fn events_match_status_changes(inputs in prop::collection::vec(any::<bool>(), 1..50)) {
        let mut t = tracker(1);
        let mut emitted = 0;

        for is_inside in &inputs {
            if t.update(*is_inside).is_some() {
                emitted += 1;
            }
            prop_assert_eq!(t.status(), FenceStatus::from_containment(*is_inside));
        }

        let changes = inputs.windows(2).filter(|w| w[0] != w[1]).count();
        prop_assert_eq!(emitted, changes);
    }

    #[test]
    fn repeated_sample_emits_at_most_once(
        prefix in prop::collection::vec(any::<bool>(), 0..20),
        repeated in any::<bool>(),
        debounce in 1u32..4,
    ) {
        let mut t = tracker(debounce);
        for is_inside in &prefix {
            t.update(*is_inside);
        }
        // Settle
        for _ in 0..debounce {
            t.update(repeated);
        }

        prop_assert_eq!(t.update(repeated), None);
        prop_assert_eq!(t.update(repeated), None);
    }

    #[test]
    fn transitions_only_after_full_debounce_run(
        inputs in prop::collection::vec(any::<bool>(), 1..60),
        debounce in 1u32..5,
    ) {
        let mut t = tracker(debounce);
        let n = debounce as usize;

        for (i, is_inside) in inputs.iter().enumerate() {
            let before = t.status();
            let emitted = t.update(*is_inside);

            if i == 0 {
                prop_assert_eq!(t.status(), FenceStatus::from_containment(*is_inside));
            }
            if before.is_resolved() && t.status() != before {
                // A crossing needs `debounce` agreeing samples in a row
                prop_assert!(i + 1 >= n);
                prop_assert!(inputs[i + 1 - n..=i].iter().all(|v| v == is_inside));
            }
            if emitted.is_some() {
                prop_assert!(before.is_resolved());
                prop_assert_ne!(before, t.status());
            }
        }
    }

    #[test]
    fn empty_monitor_never_emits(point in arbitrary_coordinate()) {
        let mut monitor = GeofenceMonitor::default();
        let sample = PositionSample::new(point, 10.0, Utc::now()).unwrap();
        prop_assert!(monitor.observe(&sample).is_empty());
    }
}
