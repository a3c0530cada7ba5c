//! Multi-van allocation: split packages across the fleet.
//!
//! # Algorithm
//!
//! Vans are taken in order of fuel rate, cheapest first. Packages are sorted
//! heaviest first. Each van skims the remaining list front to back, taking
//! every package that fits what is left of its capacity and leaving the rest
//! for the next van. Every van that took something gets its own route.
//!
//! Packages left over once the fleet is exhausted fall into two groups:
//!
//! - heavier than every van: reported as undeliverable,
//! - carriable by some van but never fitting its remaining capacity: dropped
//!   under [`LeftoverPolicy::Drop`], or handed to the cheapest van able to
//!   carry them under [`LeftoverPolicy::Retry`]. That van serves them in
//!   additional load cycles.
//!
//! A second pass against remaining capacity alone cannot help: a leftover
//! was already offered to every van while at least as much room was free.
//!
//! # Complexity
//!
//! O(v·n + v·n²) where v = vans and n = packages (skimming plus one route
//! build per van).

use crate::config::LeftoverPolicy;
use crate::constructive::build_route;
use crate::distance::route_cost;
use crate::models::{Allocation, Package, RouteResult, Van};

/// Allocates packages across `vans`, dropping leftovers.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Package, PackageId, Van};
/// use van_routing::selection::allocate;
///
/// let vans = vec![Van::new(0, 4, 1.0), Van::new(1, 6, 2.0)];
/// let packages = vec![
///     Package::new(0, 0, 1, 5),
///     Package::new(1, 0, 1, 3),
///     Package::new(2, 0, 1, 2),
/// ];
///
/// let alloc = allocate(&vans, &packages);
/// assert_eq!(alloc.num_routes(), 2);
/// assert_eq!(alloc.served(), vec![PackageId(1), PackageId(0)]);
/// // The weight-2 package fits either van but never got a slot.
/// assert!(alloc.undeliverable().is_empty());
/// ```
pub fn allocate(vans: &[Van], packages: &[Package]) -> Allocation {
    allocate_with(vans, packages, LeftoverPolicy::Drop)
}

/// Allocates packages across `vans` with an explicit leftover policy.
///
/// Every package a van is given weighs at most that van's capacity, so the
/// routes never rely on forced picks of overweight packages.
pub fn allocate_with(vans: &[Van], packages: &[Package], leftovers: LeftoverPolicy) -> Allocation {
    let mut fleet: Vec<&Van> = vans.iter().collect();
    fleet.sort_by(|a, b| a.fuel_per_distance().total_cmp(&b.fuel_per_distance()));

    let mut remaining: Vec<Package> = packages.to_vec();
    remaining.sort_by(|a, b| b.weight().cmp(&a.weight()));

    let mut loads: Vec<Vec<Package>> = Vec::with_capacity(fleet.len());
    for van in &fleet {
        let mut free = van.capacity();
        let mut taken = Vec::new();
        let mut deferred = Vec::new();
        for pkg in remaining {
            if pkg.weight() <= free {
                free -= pkg.weight();
                taken.push(pkg);
            } else {
                deferred.push(pkg);
            }
        }
        log::debug!(
            "van {} takes {} packages, {free} capacity left",
            van.id(),
            taken.len()
        );
        loads.push(taken);
        remaining = deferred;
    }

    let mut alloc = Allocation::new();
    let mut stranded = Vec::new();
    for pkg in remaining {
        if vans.iter().any(|v| v.can_carry(pkg.weight())) {
            stranded.push(pkg);
        } else {
            log::warn!("{pkg} cannot be delivered by any van");
            alloc.add_undeliverable(pkg);
        }
    }

    match leftovers {
        LeftoverPolicy::Drop => {
            for pkg in &stranded {
                log::warn!("{pkg} fits a van but was left unassigned");
            }
        }
        LeftoverPolicy::Retry => {
            for pkg in stranded {
                if let Some(i) = fleet.iter().position(|v| v.can_carry(pkg.weight())) {
                    log::debug!("{pkg} reassigned to van {}", fleet[i].id());
                    loads[i].push(pkg);
                }
            }
        }
    }

    for (van, load) in fleet.into_iter().zip(loads) {
        if load.is_empty() {
            continue;
        }
        let route = build_route(van.capacity(), &load);
        let (distance, fuel) = route_cost(van, &route);
        alloc.add_route(RouteResult::new(van.clone(), route, distance, fuel));
    }

    alloc
}
