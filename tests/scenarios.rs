//! Reference dispatch scenarios, checked end to end through the public API.

use rstest::rstest;
use van_routing::constructive::build_route;
use van_routing::distance::route_cost;
use van_routing::evaluation::{check_route, Violation};
use van_routing::models::{Package, PackageId, Route, Stop, StopKind, Van};
use van_routing::selection::{allocate, select_single_van};

fn route_of(stops: &[(i64, StopKind)]) -> Route {
    stops.iter().map(|&(p, k)| Stop::at(p, k)).collect()
}

#[rstest]
#[case(&[], 0)]
#[case(&[(0, StopKind::Start), (0, StopKind::End)], 0)]
#[case(&[(0, StopKind::Start), (-1, StopKind::Pick), (3, StopKind::Drop), (0, StopKind::End)], 8)]
#[case(&[(0, StopKind::Start), (5, StopKind::Pick), (-5, StopKind::Drop), (0, StopKind::End)], 20)]
fn distance_is_sum_of_displacements(#[case] stops: &[(i64, StopKind)], #[case] expected: u64) {
    let (distance, fuel) = route_cost(&Van::new(0, 1, 2.0), &route_of(stops));
    assert_eq!(distance, expected);
    assert!((fuel - 2.0 * expected as f64).abs() < 1e-10);
}

#[rstest]
#[case(vec![Van::new(0, 10, 2.0), Van::new(1, 5, 1.0)], 1)]
#[case(vec![Van::new(0, 5, 1.0), Van::new(1, 10, 2.0)], 0)]
#[case(vec![Van::new(0, 10, 1.0), Van::new(1, 5, 1.0)], 0)]
fn single_van_picks_lowest_fuel(#[case] vans: Vec<Van>, #[case] winner: usize) {
    let packages = vec![Package::new(0, 2, 5, 3), Package::new(1, -3, -1, 2)];
    let best = select_single_van(&vans, &packages).expect("fleet is not empty");
    assert_eq!(best.van().id(), winner);
    for van in &vans {
        let (_, fuel) = route_cost(van, &build_route(van.capacity(), &packages));
        assert!(best.fuel() <= fuel);
    }
}

#[test]
fn overweight_package_is_carried_once() {
    let route = build_route(5, &[Package::new(0, 0, 1, 10)]);
    assert!(route.is_depot_bounded());
    assert_eq!(route.stops_of(StopKind::Pick).count(), 1);
    assert_eq!(route.stops_of(StopKind::Drop).count(), 1);
    // Only the capacity check fails; pairing and bounds hold
    assert!(check_route(&route, 5)
        .iter()
        .all(|v| matches!(v, Violation::CapacityExceeded { .. })));
}

#[test]
fn greedy_allocation_drops_carriable_package() {
    let vans = vec![Van::new(0, 4, 1.0), Van::new(1, 6, 2.0)];
    let packages = vec![
        Package::new(0, 0, 1, 5),
        Package::new(1, 0, 1, 3),
        Package::new(2, 0, 1, 2),
    ];
    let alloc = allocate(&vans, &packages);

    let per_van: Vec<(usize, Vec<PackageId>)> = alloc
        .routes()
        .iter()
        .map(|r| (r.van().id(), r.route().picked_packages()))
        .collect();
    assert_eq!(
        per_van,
        vec![(0, vec![PackageId(1)]), (1, vec![PackageId(0)])]
    );
    assert!(alloc.undeliverable().is_empty());
    assert!(!alloc.served().contains(&PackageId(2)));
}

#[test]
fn empty_fleet_has_no_single_van_answer() {
    assert!(select_single_van(&[], &[Package::new(0, 1, 2, 1)]).is_none());
}

#[test]
fn opposite_extreme_positions_saturate_distance() {
    let vans = vec![Van::new(0, 10, 1.0)];
    let packages = vec![Package::new(0, i64::MAX, i64::MIN, 1)];
    let best = select_single_van(&vans, &packages).expect("fleet is not empty");
    assert_eq!(best.route().positions(), vec![0, i64::MAX, i64::MIN, 0]);
    assert_eq!(best.distance(), u64::MAX);
    assert!((best.fuel() - u64::MAX as f64).abs() < 1.0);

    let alloc = allocate(&vans, &packages);
    assert_eq!(alloc.total_distance(), u64::MAX);
}
