//! Core financial model: seasonality, revenue-to-volume strategies and the
//! insurance layer

pub mod guarded;
mod insurance;
mod point;
mod seasonality;
mod volume;

pub use insurance::{InsuranceEstimate, InsuranceLayer};
pub use point::PointEstimate;
pub use seasonality::{SeasonalityCurve, MIN_RAW_WEIGHT, MONTHS_PER_YEAR};
pub use volume::{VolumeEstimate, VolumeStrategy};
