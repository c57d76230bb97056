//! Projection of a point estimate over time: seasonal months and growth years

mod annual;
mod engine;
mod monthly;
pub mod output;

pub use annual::{AnnualRow, AnnualTable};
pub use engine::{PlanResult, PlanSummary, ProjectionEngine};
pub use monthly::{MonthlyRow, MonthlyTable};
pub use output::{write_annual_csv, write_monthly_csv};
