//! Van type with capacity and fuel rate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A delivery van.
///
/// The `id` is an opaque index assigned by the caller, normally the van's
/// position in the input list.
///
/// # Examples
///
/// ```
/// use van_routing::models::Van;
///
/// let v = Van::new(0, 10, 2.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 10);
/// assert_eq!(v.fuel_per_distance(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Van {
    id: usize,
    capacity: u32,
    fuel_per_distance: f64,
}

impl Van {
    /// Creates a van with the given ID, capacity and fuel rate.
    pub fn new(id: usize, capacity: u32, fuel_per_distance: f64) -> Self {
        Self {
            id,
            capacity,
            fuel_per_distance,
        }
    }

    /// Van ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum weight carried at once.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Fuel burnt per unit distance.
    pub fn fuel_per_distance(&self) -> f64 {
        self.fuel_per_distance
    }

    /// Returns `true` if this van could carry `weight` on an empty load.
    pub fn can_carry(&self, weight: u32) -> bool {
        weight <= self.capacity
    }
}

impl fmt::Display for Van {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.capacity, self.fuel_per_distance)
    }
}
