//! Greedy load-then-unload route construction for a single van.
//!
//! # Algorithm
//!
//! Packages are ordered by how far their pickup lies from the depot, closest
//! first, keeping input order among equals. The van then repeats a cycle:
//!
//! 1. walk the ordered list and pick every pending package that still fits,
//! 2. drop everything it carries, in list order,
//! 3. if anything is still pending, pick the first pending package without
//!    checking capacity and carry it into the next cycle.
//!
//! Step 3 guarantees at least one pick per cycle, so construction finishes
//! within `n + 1` cycles. A package heavier than the van is still carried by
//! step 3, leaving the load above capacity until it is dropped; use
//! [`OverloadPolicy::Reject`] to refuse such input instead.
//!
//! # Complexity
//!
//! O(n²) where n = number of packages.

use crate::config::OverloadPolicy;
use crate::error::PlanError;
use crate::models::{Package, Route, Stop};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Pending,
    PickedUp,
    Delivered,
}

/// Builds the stop sequence for one van.
///
/// # Examples
///
/// ```
/// use van_routing::config::OverloadPolicy;
/// use van_routing::constructive::RouteBuilder;
/// use van_routing::models::Package;
///
/// let packages = vec![Package::new(0, 2, 5, 3), Package::new(1, -3, -1, 2)];
/// let route = RouteBuilder::new(10).build(&packages).unwrap();
/// assert_eq!(route.positions(), vec![0, 2, -3, 5, -1, 0]);
///
/// let heavy = vec![Package::new(0, 0, 1, 10)];
/// let strict = RouteBuilder::new(5).with_overload(OverloadPolicy::Reject);
/// assert!(strict.build(&heavy).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteBuilder {
    capacity: u32,
    overload: OverloadPolicy,
}

impl RouteBuilder {
    /// Creates a builder for a van of the given capacity.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            overload: OverloadPolicy::default(),
        }
    }

    /// Sets how packages heavier than the capacity are handled.
    pub fn with_overload(mut self, policy: OverloadPolicy) -> Self {
        self.overload = policy;
        self
    }

    /// Capacity routes are built for.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Builds a route serving every package.
    ///
    /// Fails only under [`OverloadPolicy::Reject`], when some package is
    /// heavier than the capacity.
    pub fn build(&self, packages: &[Package]) -> Result<Route, PlanError> {
        if self.overload == OverloadPolicy::Reject {
            if let Some(p) = packages.iter().find(|p| p.weight() > self.capacity) {
                return Err(PlanError::PackageExceedsCapacity {
                    package: p.id(),
                    weight: p.weight(),
                    capacity: self.capacity,
                });
            }
        }
        Ok(self.build_cycles(packages))
    }

    fn build_cycles(&self, packages: &[Package]) -> Route {
        let mut order: Vec<&Package> = packages.iter().collect();
        order.sort_by_key(|p| p.pickup_distance());

        let capacity = u64::from(self.capacity);
        let mut status = vec![Status::Pending; order.len()];
        let mut pending = order.len();
        let mut delivered = 0;
        let mut load: u64 = 0;
        let mut cycles = 0;

        let mut route = Route::new();
        route.push_stop(Stop::start());

        while delivered < order.len() {
            cycles += 1;

            for (pkg, st) in order.iter().zip(status.iter_mut()) {
                let weight = u64::from(pkg.weight());
                if *st == Status::Pending && load + weight <= capacity {
                    load += weight;
                    *st = Status::PickedUp;
                    pending -= 1;
                    route.push_stop(Stop::pick(pkg, load, false));
                }
            }

            for (pkg, st) in order.iter().zip(status.iter_mut()) {
                if *st == Status::PickedUp {
                    load -= u64::from(pkg.weight());
                    *st = Status::Delivered;
                    delivered += 1;
                    route.push_stop(Stop::drop(pkg, load));
                }
            }

            if pending > 0 {
                if let Some(i) = status.iter().position(|s| *s == Status::Pending) {
                    let pkg = order[i];
                    load += u64::from(pkg.weight());
                    status[i] = Status::PickedUp;
                    pending -= 1;
                    if load > capacity {
                        log::warn!(
                            "package {} (weight {}) exceeds van capacity {capacity}; carrying load {load}",
                            pkg.id(),
                            pkg.weight()
                        );
                    }
                    route.push_stop(Stop::pick(pkg, load, true));
                }
            }
        }

        route.push_stop(Stop::end());
        log::debug!(
            "built route for capacity {capacity}: {} packages, {cycles} cycles, {} stops",
            order.len(),
            route.len()
        );
        route
    }
}

/// Builds a route with forced picks enabled; never fails.
///
/// # Examples
///
/// ```
/// use van_routing::constructive::build_route;
/// use van_routing::models::Package;
///
/// let route = build_route(5, &[Package::new(0, 0, 1, 10)]);
/// assert_eq!(route.to_string(), "[(0, start), (0, pick), (1, drop), (0, end)]");
/// ```
pub fn build_route(capacity: u32, packages: &[Package]) -> Route {
    RouteBuilder::new(capacity).build_cycles(packages)
}
