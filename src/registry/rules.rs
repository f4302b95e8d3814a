//! Fence definition checks using Validation.
//!
//! Checks accumulate every violation in the input instead of stopping at
//! the first, so a caller fixing a fence list sees all problems at once.

use super::Fence;
use crate::error::GeofenceError;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Accumulated outcome of checking a fence list.
pub type FenceValidation = Validation<(), NonEmptyVec<GeofenceError>>;

/// Check one fence's own fields.
pub fn check_fence(fence: &Fence) -> FenceValidation {
    let mut checks: Vec<FenceValidation> = Vec::new();

    // Rejects NaN too, since NaN > 0.0 is false
    let radius_ok = fence.radius_meters.is_finite() && fence.radius_meters > 0.0;
    checks.push(if radius_ok {
        Validation::success(())
    } else {
        Validation::fail(GeofenceError::InvalidRadius {
            fence_id: fence.id.clone(),
            radius_meters: fence.radius_meters,
        })
    });

    checks.push(match fence.center.validate() {
        Ok(()) => Validation::success(()),
        Err(err) => Validation::fail(err),
    });

    Validation::all_vec(checks).map(|_| ())
}

/// Check a whole fence list, including id uniqueness.
///
/// Violations are reported in input order: for each fence, a duplicate id
/// comes first, then its radius, then its center.
pub fn check_fences(fences: &[Fence]) -> FenceValidation {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut checks: Vec<FenceValidation> = Vec::new();

    for fence in fences {
        if !seen.insert(fence.id.as_str()) {
            checks.push(Validation::fail(GeofenceError::DuplicateFenceId(
                fence.id.clone(),
            )));
        }
        checks.push(check_fence(fence));
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;

    fn fence(id: &str, lat: f64, lon: f64, radius: f64) -> Fence {
        Fence::new(
            id,
            Coordinate {
                latitude: lat,
                longitude: lon,
            },
            radius,
        )
    }

    #[test]
    fn valid_fences_pass() {
        let fences = vec![fence("a", 0.0, 0.0, 10.0), fence("b", 1.0, 1.0, 20.0)];
        assert!(check_fences(&fences).is_success());
    }

    #[test]
    fn empty_list_passes() {
        assert!(check_fences(&[]).is_success());
    }

    #[test]
    fn check_accumulates_all_violations() {
        let fences = vec![
            fence("a", 0.0, 0.0, 10.0),
            fence("a", 95.0, 0.0, -1.0),
            fence("c", 0.0, 0.0, f64::NAN),
        ];

        match check_fences(&fences) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);

                let has_duplicate = errors
                    .iter()
                    .any(|e| matches!(e, GeofenceError::DuplicateFenceId(id) if id == "a"));
                let radius_count = errors
                    .iter()
                    .filter(|e| matches!(e, GeofenceError::InvalidRadius { .. }))
                    .count();
                let has_coordinate = errors
                    .iter()
                    .any(|e| matches!(e, GeofenceError::InvalidCoordinate { .. }));

                assert!(has_duplicate);
                assert_eq!(radius_count, 2);
                assert!(has_coordinate);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn zero_radius_is_rejected() {
        let result = check_fence(&fence("z", 0.0, 0.0, 0.0));
        assert!(result.is_failure());
    }

    #[test]
    fn infinite_radius_is_rejected() {
        let result = check_fence(&fence("z", 0.0, 0.0, f64::INFINITY));
        assert!(result.is_failure());
    }
}
