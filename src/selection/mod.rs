//! Van selection over a fleet.
//!
//! - [`select_single_van`] — Cheapest single van serving every package
//! - [`allocate`] — Greedy split of packages across the fleet by weight

mod multi_van;
mod single_van;

pub use multi_van::{allocate, allocate_with};
pub use single_van::{select_single_van, select_single_van_with};
