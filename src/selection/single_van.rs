//! Single-van selection: one van serves every package.

use crate::config::PlannerConfig;
use crate::constructive::build_route;
use crate::distance::route_cost;
use crate::error::PlanError;
use crate::evaluation::VanEvaluator;
use crate::models::{Package, RouteResult, Van};

/// Routes the whole package set on each van in turn and returns the van
/// burning the least fuel.
///
/// Ties keep the van listed first. Returns `None` when `vans` is empty.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Package, Van};
/// use van_routing::selection::select_single_van;
///
/// let vans = vec![Van::new(0, 10, 2.0), Van::new(1, 5, 1.0)];
/// let packages = vec![Package::new(0, 2, 5, 3), Package::new(1, -3, -1, 2)];
///
/// let best = select_single_van(&vans, &packages).unwrap();
/// assert_eq!(best.van().id(), 1);
/// assert_eq!(best.distance(), 22);
/// ```
pub fn select_single_van(vans: &[Van], packages: &[Package]) -> Option<RouteResult> {
    let mut best = None;
    for van in vans {
        let route = build_route(van.capacity(), packages);
        let (distance, fuel) = route_cost(van, &route);
        keep_cheapest(&mut best, RouteResult::new(van.clone(), route, distance, fuel));
    }
    best
}

/// Like [`select_single_van`], honouring the configured overload policy.
///
/// Under [`OverloadPolicy::Reject`](crate::config::OverloadPolicy::Reject)
/// the first van too small for some package fails the whole selection.
pub fn select_single_van_with(
    vans: &[Van],
    packages: &[Package],
    config: &PlannerConfig,
) -> Result<Option<RouteResult>, PlanError> {
    let mut best = None;
    for van in vans {
        let result = VanEvaluator::new(van)
            .with_overload(config.overload)
            .evaluate(packages)?;
        keep_cheapest(&mut best, result);
    }
    Ok(best)
}

fn keep_cheapest(best: &mut Option<RouteResult>, candidate: RouteResult) {
    let min_fuel = best.as_ref().map_or(f64::INFINITY, RouteResult::fuel);
    if candidate.fuel() < min_fuel {
        log::debug!(
            "van {} is cheapest so far with fuel {}",
            candidate.van().id(),
            candidate.fuel()
        );
        *best = Some(candidate);
    }
}
