//! # van-routing
//!
//! Greedy pickup-and-delivery routing for a small fleet of vans on a
//! one-dimensional line, with the depot at position 0.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Van, Package, Stop, Route, RouteResult, Allocation)
//! - [`distance`] — Route distance and fuel
//! - [`constructive`] — Single-van route construction
//! - [`evaluation`] — Van evaluation and route feasibility checks
//! - [`selection`] — Single-van selection and multi-van allocation
//! - [`validation`] — Request checks against fleet limits
//! - [`planner`] — Validated end-to-end planning
//! - [`config`] — Planner policies and limits
//! - [`error`] — Error types
//!
//! The library never prints; anomalies such as undeliverable packages are
//! returned as data and logged through the [`log`] facade.

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod planner;
pub mod selection;
pub mod validation;
