//! Fence definitions and the registry that holds them.
//!
//! A registry is built once from a list of fences and is read-only
//! afterwards. It keeps insertion order so that evaluation, and therefore
//! event order, is deterministic.

mod rules;

pub use rules::{check_fence, check_fences, FenceValidation};

use crate::error::{GeofenceError, Result};
use crate::geo::{distance, Coordinate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stillwater::validation::Validation;

/// A circular geofence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fence {
    pub id: String,
    pub center: Coordinate,
    pub radius_meters: f64,
}

impl Fence {
    /// Build a fence definition. Values are checked when the fence is
    /// loaded into a [`FenceRegistry`].
    pub fn new(id: impl Into<String>, center: Coordinate, radius_meters: f64) -> Self {
        Self {
            id: id.into(),
            center,
            radius_meters,
        }
    }

    /// Containment test: distance to the center is within the radius.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geofence_monitor::geo::Coordinate;
    /// use geofence_monitor::registry::Fence;
    ///
    /// let origin = Coordinate::new(0.0, 0.0).unwrap();
    /// let fence = Fence::new("origin", origin, 1000.0);
    ///
    /// assert!(fence.contains(&origin));
    /// assert!(!fence.contains(&Coordinate::new(10.0, 10.0).unwrap()));
    /// ```
    pub fn contains(&self, point: &Coordinate) -> bool {
        distance(point, &self.center) <= self.radius_meters
    }
}

/// Insertion-ordered, read-only set of fences keyed by id.
///
/// `FenceRegistry` is `Send + Sync` and can be shared freely for reads.
#[derive(Clone, Debug, Default)]
pub struct FenceRegistry {
    fences: Vec<Fence>,
    index: HashMap<String, usize>,
}

impl FenceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and load a fence list.
    ///
    /// Fails with the first violation in input order
    /// (`DuplicateFenceId`, `InvalidRadius` or `InvalidCoordinate`). On
    /// failure nothing is loaded. Use [`check_fences`] to see every
    /// violation at once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geofence_monitor::geo::Coordinate;
    /// use geofence_monitor::registry::{Fence, FenceRegistry};
    /// use geofence_monitor::GeofenceError;
    ///
    /// let center = Coordinate::new(0.0, 0.0).unwrap();
    /// let result = FenceRegistry::load(vec![
    ///     Fence::new("a", center, 100.0),
    ///     Fence::new("a", center, 200.0),
    /// ]);
    ///
    /// assert!(matches!(result, Err(GeofenceError::DuplicateFenceId(id)) if id == "a"));
    /// ```
    pub fn load(fences: impl IntoIterator<Item = Fence>) -> Result<Self> {
        let fences: Vec<Fence> = fences.into_iter().collect();

        if let Validation::Failure(violations) = check_fences(&fences) {
            return Err(violations.head().clone());
        }

        let index = fences
            .iter()
            .enumerate()
            .map(|(position, fence)| (fence.id.clone(), position))
            .collect();

        Ok(Self { fences, index })
    }

    /// All fences in insertion order.
    pub fn get_all(&self) -> &[Fence] {
        &self.fences
    }

    pub fn get(&self, id: &str) -> Option<&Fence> {
        self.position(id).map(|position| &self.fences[position])
    }

    /// Insertion index of a fence, for storage kept parallel to `get_all`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Like [`FenceRegistry::get`], but fails with `UnknownFenceId`.
    pub fn require(&self, id: &str) -> Result<&Fence> {
        self.get(id)
            .ok_or_else(|| GeofenceError::UnknownFenceId(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.fences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fence> {
        self.fences.iter()
    }
}

impl<'a> IntoIterator for &'a FenceRegistry {
    type Item = &'a Fence;
    type IntoIter = std::slice::Iter<'a, Fence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
