//! Van evaluator that builds a route and prices it, plus route checks.

use std::collections::HashMap;

use crate::config::OverloadPolicy;
use crate::constructive::RouteBuilder;
use crate::distance::route_cost;
use crate::error::PlanError;
use crate::models::{Package, PackageId, Route, RouteResult, StopKind, Van};

/// A type of constraint violation in a route.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Route does not open with `(0, start)` or close with `(0, end)`.
    NotDepotBounded,
    /// Carried load above capacity.
    CapacityExceeded {
        /// Index of the stop in the route.
        stop_index: usize,
        /// Load after that stop.
        load: u64,
        /// Van capacity.
        capacity: u32,
    },
    /// A package without exactly one pick and one drop.
    UnpairedPackage {
        /// The package.
        package: PackageId,
        /// Pick stops seen.
        picks: usize,
        /// Drop stops seen.
        drops: usize,
    },
    /// A package dropped before it was picked.
    DropBeforePick {
        /// The package.
        package: PackageId,
    },
}

/// Checks a route against the structural invariants and `capacity`.
///
/// A feasible route has an empty violations list. Routes that carry an
/// overweight package through a forced pick report
/// [`Violation::CapacityExceeded`] for every stop where it is on board.
///
/// # Examples
///
/// ```
/// use van_routing::constructive::build_route;
/// use van_routing::evaluation::check_route;
/// use van_routing::models::Package;
///
/// let route = build_route(10, &[Package::new(0, 2, 5, 3)]);
/// assert!(check_route(&route, 10).is_empty());
/// assert_eq!(check_route(&route, 2).len(), 1);
/// ```
pub fn check_route(route: &Route, capacity: u32) -> Vec<Violation> {
    let mut violations = Vec::new();
    if !route.is_depot_bounded() {
        violations.push(Violation::NotDepotBounded);
    }

    // (picks, drops) per package, kept in first-seen order for stable output
    let mut counts: HashMap<PackageId, (usize, usize)> = HashMap::new();
    let mut seen = Vec::new();

    for (idx, stop) in route.stops().iter().enumerate() {
        if stop.load_after > u64::from(capacity) {
            violations.push(Violation::CapacityExceeded {
                stop_index: idx,
                load: stop.load_after,
                capacity,
            });
        }
        let Some(id) = stop.package else { continue };
        let entry = counts.entry(id).or_insert_with(|| {
            seen.push(id);
            (0, 0)
        });
        match stop.kind {
            StopKind::Pick => entry.0 += 1,
            StopKind::Drop => {
                if entry.0 == 0 {
                    violations.push(Violation::DropBeforePick { package: id });
                }
                entry.1 += 1;
            }
            StopKind::Start | StopKind::End => {}
        }
    }

    for id in seen {
        let (picks, drops) = counts[&id];
        if picks != 1 || drops != 1 {
            violations.push(Violation::UnpairedPackage {
                package: id,
                picks,
                drops,
            });
        }
    }

    violations
}

/// Builds and prices a route for one van.
///
/// # Examples
///
/// ```
/// use van_routing::evaluation::VanEvaluator;
/// use van_routing::models::{Package, Van};
///
/// let van = Van::new(0, 10, 2.0);
/// let packages = vec![Package::new(0, 2, 5, 3), Package::new(1, -3, -1, 2)];
/// let result = VanEvaluator::new(&van).evaluate(&packages).unwrap();
/// assert_eq!(result.distance(), 22);
/// assert!((result.fuel() - 44.0).abs() < 1e-10);
/// ```
pub struct VanEvaluator<'a> {
    van: &'a Van,
    overload: OverloadPolicy,
}

impl<'a> VanEvaluator<'a> {
    /// Creates an evaluator for `van` with forced picks enabled.
    pub fn new(van: &'a Van) -> Self {
        Self {
            van,
            overload: OverloadPolicy::default(),
        }
    }

    /// Sets how packages heavier than the van are handled.
    pub fn with_overload(mut self, policy: OverloadPolicy) -> Self {
        self.overload = policy;
        self
    }

    /// Routes `packages` on this van and computes distance and fuel.
    pub fn evaluate(&self, packages: &[Package]) -> Result<RouteResult, PlanError> {
        let route = RouteBuilder::new(self.van.capacity())
            .with_overload(self.overload)
            .build(packages)?;
        let (distance, fuel) = route_cost(self.van, &route);
        log::debug!(
            "van {} {}: {} packages, distance {distance}, fuel {fuel}",
            self.van.id(),
            self.van,
            packages.len()
        );
        Ok(RouteResult::new(self.van.clone(), route, distance, fuel))
    }
}
