//! Route evaluation and feasibility checking.

mod evaluator;

pub use evaluator::{check_route, VanEvaluator, Violation};
