//! Business plan model for per-stay hotel insurance
//!
//! Converts a hotel company's annual revenue into stays, insurance policies
//! and insurance P&L, then spreads the result over a seasonal year and a
//! multi-year growth horizon.
//!
//! ```rust
//! use stay_cover::{ProjectionEngine, ScenarioConfig};
//!
//! let engine = ProjectionEngine::from_scenario(&ScenarioConfig::default());
//! let plan = engine.project(50_000_000.0);
//! assert_eq!(plan.monthly.len(), 12);
//! ```

pub mod assumptions;
pub mod company;
pub mod error;
pub mod format;
pub mod model;
pub mod projection;

pub use assumptions::{
    DirectAssumptions, HotelAssumptions, InsuranceAssumptions, ProjectionAssumptions, ScenarioConfig,
};
pub use company::{CompanyRecord, Scope, ZoneSelection};
pub use error::{PlanError, Result};
pub use model::{InsuranceLayer, PointEstimate, SeasonalityCurve, VolumeStrategy};
pub use projection::{AnnualTable, MonthlyTable, PlanResult, ProjectionEngine};
