//! Validated end-to-end planning: single-van choice and fleet allocation.

use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::models::{Allocation, Package, RouteResult, Van};
use crate::selection::{allocate_with, select_single_van_with};
use crate::validation::validate;

/// Vans and packages to plan for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// The fleet.
    pub vans: Vec<Van>,
    /// Packages to deliver.
    pub packages: Vec<Package>,
}

impl PlanRequest {
    /// Builds a request from raw `(capacity, fuel_per_distance)` and
    /// `(pickup, dropoff, weight)` records, numbering vans and packages in
    /// input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use van_routing::models::PackageId;
    /// use van_routing::planner::PlanRequest;
    ///
    /// let req = PlanRequest::from_records(&[(10, 2.0)], &[(2, 5, 3), (2, 5, 3)]);
    /// assert_eq!(req.packages[1].id(), PackageId(1));
    /// ```
    pub fn from_records(vans: &[(u32, f64)], packages: &[(i64, i64, u32)]) -> Self {
        Self {
            vans: vans
                .iter()
                .enumerate()
                .map(|(i, &(capacity, rate))| Van::new(i, capacity, rate))
                .collect(),
            packages: packages
                .iter()
                .enumerate()
                .map(|(i, &(pickup, dropoff, weight))| Package::new(i, pickup, dropoff, weight))
                .collect(),
        }
    }
}

/// Both planning outcomes for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Cheapest single van serving every package.
    pub single: Option<RouteResult>,
    /// Packages split across the fleet.
    pub multi: Allocation,
}

/// Validates `request` and runs both planners.
///
/// # Examples
///
/// ```
/// use van_routing::config::PlannerConfig;
/// use van_routing::planner::{plan, PlanRequest};
///
/// let req = PlanRequest::from_records(&[(10, 2.0), (5, 1.0)], &[(2, 5, 3), (-3, -1, 2)]);
/// let report = plan(&req, &PlannerConfig::default()).unwrap();
/// assert_eq!(report.single.unwrap().van().id(), 1);
/// assert_eq!(report.multi.num_routes(), 1);
/// ```
pub fn plan(request: &PlanRequest, config: &PlannerConfig) -> Result<PlanReport, PlanError> {
    validate(&request.vans, &request.packages, &config.limits)?;
    log::info!(
        "planning {} packages across {} vans",
        request.packages.len(),
        request.vans.len()
    );
    let single = select_single_van_with(&request.vans, &request.packages, config)?;
    let multi = allocate_with(&request.vans, &request.packages, config.leftovers);
    Ok(PlanReport { single, multi })
}
