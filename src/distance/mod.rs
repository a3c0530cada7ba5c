//! Distance and fuel calculation.
//!
//! Positions live on a single line with the depot at 0, so the distance of a
//! leg is the absolute displacement between its endpoints.

mod fuel;

pub use fuel::{route_cost, route_distance};
