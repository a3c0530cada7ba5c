//! Distance and fuel for a stop sequence on the line.

use crate::models::{Route, Stop, Van};

/// Total distance covered by visiting `stops` in order, starting at the
/// depot.
///
/// Each leg costs the absolute displacement between consecutive positions.
/// The cursor starts at position 0, so a sequence that does not open at the
/// depot still pays the leg out of it.
///
/// The total saturates at `u64::MAX`, which only routes swinging between
/// the extremes of the `i64` range can reach.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Stop, StopKind};
/// use van_routing::distance::route_distance;
///
/// let stops = [Stop::at(-1, StopKind::Pick), Stop::at(3, StopKind::Drop)];
/// assert_eq!(route_distance(&stops), 5);
/// ```
pub fn route_distance(stops: &[Stop]) -> u64 {
    let mut cursor = 0_i64;
    let mut total = 0_u64;
    for stop in stops {
        total = total.saturating_add(stop.position.abs_diff(cursor));
        cursor = stop.position;
    }
    total
}

/// Returns `(distance, fuel)` for `van` driving `route`.
///
/// Only the van's fuel rate is used. An empty route costs nothing.
///
/// # Examples
///
/// ```
/// use van_routing::models::{Route, Stop, StopKind, Van};
/// use van_routing::distance::route_cost;
///
/// let route: Route = vec![
///     Stop::start(),
///     Stop::at(-1, StopKind::Pick),
///     Stop::at(3, StopKind::Drop),
///     Stop::end(),
/// ]
/// .into_iter()
/// .collect();
/// let (distance, fuel) = route_cost(&Van::new(0, 10, 2.0), &route);
/// assert_eq!(distance, 8);
/// assert!((fuel - 16.0).abs() < 1e-10);
/// ```
pub fn route_cost(van: &Van, route: &Route) -> (u64, f64) {
    let distance = route_distance(route.stops());
    (distance, distance as f64 * van.fuel_per_distance())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StopKind;

    fn route(positions: &[(i64, StopKind)]) -> Route {
        positions.iter().map(|&(p, k)| Stop::at(p, k)).collect()
    }

    #[test]
    fn test_empty_route() {
        let (d, f) = route_cost(&Van::new(0, 5, 3.0), &Route::new());
        assert_eq!(d, 0);
        assert_eq!(f, 0.0);
    }

    #[test]
    fn test_depot_only_route() {
        let r = route(&[(0, StopKind::Start), (0, StopKind::End)]);
        assert_eq!(route_cost(&Van::new(0, 5, 3.0), &r), (0, 0.0));
    }

    #[test]
    fn test_reference_route() {
        let r = route(&[
            (0, StopKind::Start),
            (-1, StopKind::Pick),
            (3, StopKind::Drop),
            (0, StopKind::End),
        ]);
        let (d, f) = route_cost(&Van::new(0, 10, 2.0), &r);
        // |-1 - 0| + |3 - -1| + |0 - 3| = 1 + 4 + 3
        assert_eq!(d, 8);
        assert!((f - 16.0).abs() < 1e-10);
    }

    #[test]
    fn test_repeated_position_is_free() {
        let r = route(&[
            (0, StopKind::Start),
            (4, StopKind::Pick),
            (4, StopKind::Pick),
            (0, StopKind::End),
        ]);
        assert_eq!(route_distance(r.stops()), 8);
    }

    #[test]
    fn test_zero_fuel_rate() {
        let r = route(&[(0, StopKind::Start), (6, StopKind::Pick), (0, StopKind::End)]);
        let (d, f) = route_cost(&Van::new(0, 5, 0.0), &r);
        assert_eq!(d, 12);
        assert_eq!(f, 0.0);
    }

    #[test]
    fn test_extreme_positions_saturate() {
        let r = route(&[
            (0, StopKind::Start),
            (i64::MAX, StopKind::Pick),
            (i64::MIN, StopKind::Drop),
            (0, StopKind::End),
        ]);
        let (d, f) = route_cost(&Van::new(0, 10, 1.0), &r);
        assert_eq!(d, u64::MAX);
        assert!(f.is_finite());
    }

    #[test]
    fn test_single_extreme_leg_is_exact() {
        let r = route(&[(i64::MIN, StopKind::Pick), (i64::MAX, StopKind::Drop)]);
        // |MIN - 0| + |MAX - MIN| = 2^63 + (2^64 - 1) overflows; first leg alone fits
        assert_eq!(route_distance(&r.stops()[..1]), 1_u64 << 63);
        assert_eq!(route_distance(r.stops()), u64::MAX);
    }

    #[test]
    fn test_cursor_starts_at_depot() {
        let r = route(&[(-5, StopKind::Pick)]);
        assert_eq!(route_distance(r.stops()), 5);
    }
}
