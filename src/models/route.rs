//! Route and stop types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Package, PackageId};

/// Role of a stop within a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopKind {
    /// Leaving the depot.
    Start,
    /// Loading a package.
    Pick,
    /// Unloading a package.
    Drop,
    /// Returning to the depot.
    End,
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopKind::Start => "start",
            StopKind::Pick => "pick",
            StopKind::Drop => "drop",
            StopKind::End => "end",
        };
        f.write_str(s)
    }
}

/// A single stop within a route.
///
/// Tracks the package served (none for depot stops) and the carried load
/// once the stop has been handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Position on the line.
    pub position: i64,
    /// Role of this stop.
    pub kind: StopKind,
    /// Package loaded or unloaded here.
    pub package: Option<PackageId>,
    /// Carried load after this stop.
    pub load_after: u64,
    /// `true` for a pick that ignored the capacity check.
    pub forced: bool,
}

impl Stop {
    /// Departure from the depot.
    pub fn start() -> Self {
        Self::depot(StopKind::Start)
    }

    /// Return to the depot.
    pub fn end() -> Self {
        Self::depot(StopKind::End)
    }

    /// Pick of `package`, leaving `load_after` on board.
    pub fn pick(package: &Package, load_after: u64, forced: bool) -> Self {
        Self {
            position: package.pickup(),
            kind: StopKind::Pick,
            package: Some(package.id()),
            load_after,
            forced,
        }
    }

    /// Drop of `package`, leaving `load_after` on board.
    pub fn drop(package: &Package, load_after: u64) -> Self {
        Self {
            position: package.dropoff(),
            kind: StopKind::Drop,
            package: Some(package.id()),
            load_after,
            forced: false,
        }
    }

    /// A bare stop with no package, used for ad hoc sequences.
    pub fn at(position: i64, kind: StopKind) -> Self {
        Self {
            position,
            kind,
            package: None,
            load_after: 0,
            forced: false,
        }
    }

    fn depot(kind: StopKind) -> Self {
        Self::at(0, kind)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position, self.kind)
    }
}

/// An ordered stop sequence driven by a single van.
///
/// Routes produced by the builder always open with `(0, start)` and close
/// with `(0, end)`; see [`Route::is_depot_bounded`].
///
/// # Examples
///
/// ```
/// use van_routing::models::{Route, Stop, StopKind};
///
/// let route: Route = vec![
///     Stop::start(),
///     Stop::at(-1, StopKind::Pick),
///     Stop::at(3, StopKind::Drop),
///     Stop::end(),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(route.len(), 4);
/// assert!(route.is_depot_bounded());
/// assert_eq!(route.to_string(), "[(0, start), (-1, pick), (3, drop), (0, end)]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Appends a stop to the end of this route.
    pub fn push_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }

    /// Returns the ordered stops.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops, depot stops included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Positions in visit order.
    pub fn positions(&self) -> Vec<i64> {
        self.stops.iter().map(|s| s.position).collect()
    }

    /// Stops of the given kind, in visit order.
    pub fn stops_of(&self, kind: StopKind) -> impl Iterator<Item = &Stop> {
        self.stops.iter().filter(move |s| s.kind == kind)
    }

    /// Packages in pick order.
    pub fn picked_packages(&self) -> Vec<PackageId> {
        self.stops_of(StopKind::Pick)
            .filter_map(|s| s.package)
            .collect()
    }

    /// Highest carried load reached along the route.
    pub fn peak_load(&self) -> u64 {
        self.stops.iter().map(|s| s.load_after).max().unwrap_or(0)
    }

    /// Returns `true` if any pick ignored the capacity check.
    pub fn has_forced_pick(&self) -> bool {
        self.stops.iter().any(|s| s.forced)
    }

    /// Returns `true` if the route opens with `(0, start)` and closes with
    /// `(0, end)`.
    pub fn is_depot_bounded(&self) -> bool {
        let opens = self
            .stops
            .first()
            .is_some_and(|s| s.kind == StopKind::Start && s.position == 0);
        let closes = self
            .stops
            .last()
            .is_some_and(|s| s.kind == StopKind::End && s.position == 0);
        opens && closes
    }
}

impl FromIterator<Stop> for Route {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        Self {
            stops: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{stop}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.peak_load(), 0);
        assert!(!r.is_depot_bounded());
        assert_eq!(r.to_string(), "[]");
    }

    #[test]
    fn test_route_push_stop() {
        let a = Package::new(0, 2, 5, 3);
        let b = Package::new(1, -3, -1, 2);
        let mut r = Route::new();
        r.push_stop(Stop::start());
        r.push_stop(Stop::pick(&b, 2, false));
        r.push_stop(Stop::pick(&a, 5, false));
        r.push_stop(Stop::drop(&b, 3));
        r.push_stop(Stop::drop(&a, 0));
        r.push_stop(Stop::end());
        assert_eq!(r.len(), 6);
        assert_eq!(r.positions(), vec![0, -3, 2, -1, 5, 0]);
        assert_eq!(r.picked_packages(), vec![PackageId(1), PackageId(0)]);
        assert_eq!(r.peak_load(), 5);
        assert!(r.is_depot_bounded());
        assert!(!r.has_forced_pick());
    }

    #[test]
    fn test_stop_constructors() {
        let p = Package::new(4, -2, 7, 1);
        let pick = Stop::pick(&p, 1, true);
        assert_eq!(pick.position, -2);
        assert_eq!(pick.kind, StopKind::Pick);
        assert_eq!(pick.package, Some(PackageId(4)));
        assert!(pick.forced);

        let drop = Stop::drop(&p, 0);
        assert_eq!(drop.position, 7);
        assert_eq!(drop.kind, StopKind::Drop);
        assert!(!drop.forced);

        assert_eq!(Stop::start().position, 0);
        assert_eq!(Stop::end().kind, StopKind::End);
    }

    #[test]
    fn test_not_bounded_when_end_missing() {
        let r: Route = vec![Stop::start(), Stop::at(4, StopKind::Pick)]
            .into_iter()
            .collect();
        assert!(!r.is_depot_bounded());
    }

    #[test]
    fn test_stop_kind_serde_lowercase() {
        let json = serde_json::to_string(&StopKind::Pick).expect("serialize");
        assert_eq!(json, "\"pick\"");
    }
}
