//! Error types for request validation and planning.

use thiserror::Error;

use crate::models::PackageId;

/// Reasons a planning request is rejected before any route is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The fleet is empty.
    #[error("at least one van is required")]
    NoVans,
    /// More vans than the configured limit.
    #[error("{count} vans supplied, at most {max} allowed")]
    TooManyVans {
        /// Vans supplied.
        count: usize,
        /// Configured limit.
        max: usize,
    },
    /// No packages to deliver.
    #[error("at least one package is required")]
    NoPackages,
    /// More packages than the configured limit.
    #[error("{count} packages supplied, at most {max} allowed")]
    TooManyPackages {
        /// Packages supplied.
        count: usize,
        /// Configured limit.
        max: usize,
    },
    /// A van's fuel rate is negative or not finite.
    #[error("van {van_id} has invalid fuel rate {rate}")]
    InvalidFuelRate {
        /// Offending van.
        van_id: usize,
        /// Rate supplied.
        rate: f64,
    },
    /// A package is heavier than every van in the fleet.
    #[error("package {package} weight ({weight}) exceeds the capacity of all vans")]
    PackageTooHeavy {
        /// Offending package.
        package: PackageId,
        /// Its weight.
        weight: u32,
    },
}

/// Errors returned by the planners.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// The request failed validation.
    #[error("invalid planning request")]
    Input(#[from] InputError),
    /// A package cannot fit a van on its own and forced picks are disabled.
    #[error("package {package} weight ({weight}) exceeds van capacity {capacity}")]
    PackageExceedsCapacity {
        /// Offending package.
        package: PackageId,
        /// Its weight.
        weight: u32,
        /// Capacity of the van being routed.
        capacity: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(
            InputError::TooManyVans { count: 4, max: 3 }.to_string(),
            "4 vans supplied, at most 3 allowed"
        );
        assert_eq!(
            InputError::PackageTooHeavy {
                package: PackageId(2),
                weight: 12,
            }
            .to_string(),
            "package #2 weight (12) exceeds the capacity of all vans"
        );
    }

    #[test]
    fn test_plan_error_wraps_input() {
        let err: PlanError = InputError::NoVans.into();
        assert_eq!(err, PlanError::Input(InputError::NoVans));
        let source = err.source().expect("has source");
        assert_eq!(source.to_string(), "at least one van is required");
    }
}
