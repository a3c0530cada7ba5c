//! Planner configuration.
//!
//! Everything defaults to the behaviour of the reference dispatcher: at most
//! three vans and five packages, forced picks for overweight packages, and
//! no second allocation pass.

use serde::{Deserialize, Serialize};

/// What the route builder does with a package heavier than the van.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadPolicy {
    /// Pick it anyway once nothing else is pending ahead of it. The route
    /// terminates but its carried load exceeds the capacity.
    #[default]
    ForcePick,
    /// Refuse to build the route.
    Reject,
}

/// What the multi-van allocator does with packages that no van took on the
/// first pass but that some van could carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftoverPolicy {
    /// Drop them from the output.
    #[default]
    Drop,
    /// Offer them again to vans with spare capacity.
    Retry,
}

/// Bounds on request size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetLimits {
    /// Maximum number of vans.
    pub max_vans: usize,
    /// Maximum number of packages.
    pub max_packages: usize,
}

impl Default for FleetLimits {
    fn default() -> Self {
        Self {
            max_vans: 3,
            max_packages: 5,
        }
    }
}

/// Planner configuration.
///
/// # Examples
///
/// ```
/// use van_routing::config::{LeftoverPolicy, OverloadPolicy, PlannerConfig};
///
/// let config = PlannerConfig::default()
///     .with_max_vans(4)
///     .with_leftovers(LeftoverPolicy::Retry);
/// assert_eq!(config.limits.max_vans, 4);
/// assert_eq!(config.limits.max_packages, 5);
/// assert_eq!(config.overload, OverloadPolicy::ForcePick);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Request size bounds.
    pub limits: FleetLimits,
    /// Overweight package handling.
    pub overload: OverloadPolicy,
    /// Leftover package handling.
    pub leftovers: LeftoverPolicy,
}

impl PlannerConfig {
    /// Sets the maximum number of vans.
    pub fn with_max_vans(mut self, max: usize) -> Self {
        self.limits.max_vans = max;
        self
    }

    /// Sets the maximum number of packages.
    pub fn with_max_packages(mut self, max: usize) -> Self {
        self.limits.max_packages = max;
        self
    }

    /// Sets the overweight package policy.
    pub fn with_overload(mut self, policy: OverloadPolicy) -> Self {
        self.overload = policy;
        self
    }

    /// Sets the leftover package policy.
    pub fn with_leftovers(mut self, policy: LeftoverPolicy) -> Self {
        self.leftovers = policy;
        self
    }
}
