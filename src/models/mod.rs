//! Domain model types for van routing.
//!
//! Provides vans with capacities and fuel rates, packages with stable
//! identifiers, routes as ordered stop sequences, and the per-van and
//! per-fleet results the planners return.

mod package;
mod route;
mod solution;
mod van;

pub use package::{Package, PackageId};
pub use route::{Route, Stop, StopKind};
pub use solution::{Allocation, RouteResult};
pub use van::Van;
