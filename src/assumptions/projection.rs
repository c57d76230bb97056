//! Time assumptions: horizon, growth and seasonality

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Horizons offered to users
pub const STANDARD_HORIZONS: [u32; 3] = [1, 3, 5];

/// Largest seasonality amplitude accepted at the input boundary
pub const MAX_SEASONALITY_AMPLITUDE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionAssumptions {
    /// Number of projected years (year 1 included)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Year-over-year growth of hotel revenue (0.05 = 5%, may be negative)
    #[serde(default = "default_yoy_growth")]
    pub yoy_growth: f64,

    /// Relative swing of the seasonal curve around its mean
    #[serde(default = "default_seasonality_amplitude")]
    pub seasonality_amplitude: f64,

    /// Busiest month, 1 = January. Out-of-range values wrap modulo 12
    #[serde(default = "default_peak_month")]
    pub peak_month: u32,
}

fn default_horizon_years() -> u32 { 1 }
fn default_yoy_growth() -> f64 { 0.05 }
fn default_seasonality_amplitude() -> f64 { 0.20 }
fn default_peak_month() -> u32 { 7 }

impl Default for ProjectionAssumptions {
    fn default() -> Self {
        Self {
            horizon_years: 1,
            yoy_growth: 0.05,
            seasonality_amplitude: 0.20,
            peak_month: 7, // July
        }
    }
}

impl ProjectionAssumptions {
    /// Revenue multiple of year `year` (1-indexed) relative to year 1
    pub fn growth_factor(&self, year: u32) -> f64 {
        (1.0 + self.yoy_growth).powi(year.saturating_sub(1) as i32)
    }

    /// Whether the horizon is one of [`STANDARD_HORIZONS`]
    pub fn is_standard_horizon(&self) -> bool {
        STANDARD_HORIZONS.contains(&self.horizon_years)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon_years == 0 {
            return Err(PlanError::invalid("horizon_years", 0.0, "must be at least 1"));
        }
        if !(self.yoy_growth.is_finite() && self.yoy_growth >= -1.0) {
            return Err(PlanError::invalid("yoy_growth", self.yoy_growth, "must be at least -1"));
        }
        if !(0.0..=MAX_SEASONALITY_AMPLITUDE).contains(&self.seasonality_amplitude) {
            return Err(PlanError::invalid(
                "seasonality_amplitude",
                self.seasonality_amplitude,
                format!("must be in [0, {}]", MAX_SEASONALITY_AMPLITUDE),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_factor() {
        let p = ProjectionAssumptions { yoy_growth: 0.05, ..Default::default() };
        assert_eq!(p.growth_factor(1), 1.0);
        assert!((p.growth_factor(2) - 1.05).abs() < 1e-12);
        assert!((p.growth_factor(3) - 1.1025).abs() < 1e-12);
        // Year 0 is treated as year 1
        assert_eq!(p.growth_factor(0), 1.0);
    }

    #[test]
    fn test_standard_horizons() {
        for horizon_years in STANDARD_HORIZONS {
            let p = ProjectionAssumptions { horizon_years, ..Default::default() };
            assert!(p.is_standard_horizon());
        }
        let custom = ProjectionAssumptions { horizon_years: 4, ..Default::default() };
        assert!(!custom.is_standard_horizon());
        assert!(custom.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(ProjectionAssumptions::default().validate().is_ok());

        let no_horizon = ProjectionAssumptions { horizon_years: 0, ..Default::default() };
        assert!(no_horizon.validate().is_err());

        let shrinking = ProjectionAssumptions { yoy_growth: -0.2, ..Default::default() };
        assert!(shrinking.validate().is_ok());

        let collapse = ProjectionAssumptions { yoy_growth: -1.5, ..Default::default() };
        assert!(collapse.validate().is_err());

        // Peak month wraps instead of failing
        let wrapped = ProjectionAssumptions { peak_month: 14, ..Default::default() };
        assert!(wrapped.validate().is_ok());
    }
}
