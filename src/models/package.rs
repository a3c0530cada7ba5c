//! Package and package identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a package at input time.
///
/// Packages are told apart by this ID, never by their field values, so two
/// packages with the same pickup, dropoff and weight remain distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(pub usize);

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A package to move from `pickup` to `dropoff`.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Package, PackageId};
///
/// let p = Package::new(0, -1, 3, 4);
/// assert_eq!(p.id(), PackageId(0));
/// assert_eq!(p.pickup(), -1);
/// assert_eq!(p.dropoff(), 3);
/// assert_eq!(p.weight(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    id: PackageId,
    pickup: i64,
    dropoff: i64,
    weight: u32,
}

impl Package {
    /// Creates a package.
    pub fn new(id: usize, pickup: i64, dropoff: i64, weight: u32) -> Self {
        Self {
            id: PackageId(id),
            pickup,
            dropoff,
            weight,
        }
    }

    /// Package ID.
    pub fn id(&self) -> PackageId {
        self.id
    }

    /// Pickup position.
    pub fn pickup(&self) -> i64 {
        self.pickup
    }

    /// Dropoff position.
    pub fn dropoff(&self) -> i64 {
        self.dropoff
    }

    /// Weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Distance of the pickup position from the depot.
    pub fn pickup_distance(&self) -> u64 {
        self.pickup.unsigned_abs()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "package {} with weight {} (pickup: {}, dropoff: {})",
            self.id, self.weight, self.pickup, self.dropoff
        )
    }
}
