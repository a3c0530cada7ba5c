//! Per-van route results and fleet allocations.

use serde::{Deserialize, Serialize};

use super::{Package, PackageId, Route, Van};

/// The outcome of evaluating one van on one package set.
///
/// Created once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    van: Van,
    route: Route,
    distance: u64,
    fuel: f64,
}

impl RouteResult {
    /// Creates a result.
    pub fn new(van: Van, route: Route, distance: u64, fuel: f64) -> Self {
        Self {
            van,
            route,
            distance,
            fuel,
        }
    }

    /// The van that drives the route.
    pub fn van(&self) -> &Van {
        &self.van
    }

    /// The stop sequence.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Total distance travelled.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Total fuel burnt.
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// Splits the result into `(van, route, distance, fuel)`.
    pub fn into_parts(self) -> (Van, Route, u64, f64) {
        (self.van, self.route, self.distance, self.fuel)
    }
}

/// Packages split across a fleet.
///
/// # Examples
///
/// ```
/// use van_routing::models::Allocation;
///
/// let alloc = Allocation::new();
/// assert_eq!(alloc.num_routes(), 0);
/// assert!(alloc.undeliverable().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    routes: Vec<RouteResult>,
    undeliverable: Vec<Package>,
}

impl Allocation {
    /// Creates an empty allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a van's route.
    pub fn add_route(&mut self, result: RouteResult) {
        self.routes.push(result);
    }

    /// Records a package no van in the fleet can carry.
    pub fn add_undeliverable(&mut self, package: Package) {
        self.undeliverable.push(package);
    }

    /// Routes in van efficiency order.
    pub fn routes(&self) -> &[RouteResult] {
        &self.routes
    }

    /// Packages heavier than every van's capacity.
    pub fn undeliverable(&self) -> &[Package] {
        &self.undeliverable
    }

    /// Number of vans used.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Distance summed over all routes, saturating at `u64::MAX`.
    pub fn total_distance(&self) -> u64 {
        self.routes
            .iter()
            .map(RouteResult::distance)
            .fold(0, u64::saturating_add)
    }

    /// Fuel summed over all routes.
    pub fn total_fuel(&self) -> f64 {
        self.routes.iter().map(RouteResult::fuel).sum()
    }

    /// Every package picked by some route, in route order.
    pub fn served(&self) -> Vec<PackageId> {
        self.routes
            .iter()
            .flat_map(|r| r.route().picked_packages())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    fn result(van: Van, package: &Package, distance: u64, fuel: f64) -> RouteResult {
        let route: Route = vec![
            Stop::start(),
            Stop::pick(package, u64::from(package.weight()), false),
            Stop::drop(package, 0),
            Stop::end(),
        ]
        .into_iter()
        .collect();
        RouteResult::new(van, route, distance, fuel)
    }

    #[test]
    fn test_allocation_empty() {
        let alloc = Allocation::new();
        assert_eq!(alloc.num_routes(), 0);
        assert_eq!(alloc.total_distance(), 0);
        assert_eq!(alloc.total_fuel(), 0.0);
        assert!(alloc.served().is_empty());
    }

    #[test]
    fn test_allocation_totals() {
        let p0 = Package::new(0, 1, 2, 3);
        let p1 = Package::new(1, -1, -2, 1);
        let mut alloc = Allocation::new();
        alloc.add_route(result(Van::new(0, 5, 1.0), &p0, 4, 4.0));
        alloc.add_route(result(Van::new(1, 5, 2.0), &p1, 4, 8.0));
        alloc.add_undeliverable(Package::new(2, 0, 1, 99));

        assert_eq!(alloc.num_routes(), 2);
        assert_eq!(alloc.total_distance(), 8);
        assert!((alloc.total_fuel() - 12.0).abs() < 1e-10);
        assert_eq!(alloc.served(), vec![PackageId(0), PackageId(1)]);
        assert_eq!(alloc.undeliverable().len(), 1);
    }

    #[test]
    fn test_route_result_into_parts() {
        let p = Package::new(0, 1, 2, 3);
        let (van, route, distance, fuel) =
            result(Van::new(7, 5, 1.0), &p, 4, 4.0).into_parts();
        assert_eq!(van.id(), 7);
        assert_eq!(route.len(), 4);
        assert_eq!(distance, 4);
        assert_eq!(fuel, 4.0);
    }
}
