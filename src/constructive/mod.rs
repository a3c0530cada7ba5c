//! Constructive heuristics for building a single van's route.
//!
//! - [`RouteBuilder`] — Greedy pick-until-full, drop-everything cycles, O(n²)

mod greedy_cycle;

pub use greedy_cycle::{build_route, RouteBuilder};
