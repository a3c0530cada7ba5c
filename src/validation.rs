//! Request validation run before any route is built.

use crate::config::FleetLimits;
use crate::error::InputError;
use crate::models::{Package, Van};

/// Checks vans and packages against `limits`.
///
/// Rejects empty or oversized fleets and package lists, fuel rates that are
/// negative or not finite, and any package heavier than every van. Checks
/// run in that order and the first failure is returned.
///
/// # Examples
///
/// ```
/// use van_routing::config::FleetLimits;
/// use van_routing::error::InputError;
/// use van_routing::models::{Package, Van};
/// use van_routing::validation::validate;
///
/// let vans = vec![Van::new(0, 5, 1.0)];
/// assert!(validate(&vans, &[Package::new(0, 1, 2, 5)], &FleetLimits::default()).is_ok());
///
/// let err = validate(&vans, &[Package::new(0, 1, 2, 6)], &FleetLimits::default());
/// assert!(matches!(err, Err(InputError::PackageTooHeavy { weight: 6, .. })));
/// ```
pub fn validate(vans: &[Van], packages: &[Package], limits: &FleetLimits) -> Result<(), InputError> {
    if vans.is_empty() {
        return Err(InputError::NoVans);
    }
    if vans.len() > limits.max_vans {
        return Err(InputError::TooManyVans {
            count: vans.len(),
            max: limits.max_vans,
        });
    }
    if packages.is_empty() {
        return Err(InputError::NoPackages);
    }
    if packages.len() > limits.max_packages {
        return Err(InputError::TooManyPackages {
            count: packages.len(),
            max: limits.max_packages,
        });
    }
    for van in vans {
        let rate = van.fuel_per_distance();
        if !rate.is_finite() || rate < 0.0 {
            return Err(InputError::InvalidFuelRate {
                van_id: van.id(),
                rate,
            });
        }
    }
    for pkg in packages {
        if !vans.iter().any(|v| v.can_carry(pkg.weight())) {
            return Err(InputError::PackageTooHeavy {
                package: pkg.id(),
                weight: pkg.weight(),
            });
        }
    }
    Ok(())
}
