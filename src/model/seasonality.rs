//! Monthly seasonality curve
//!
//! A single-peak cosine around the mean month, floored so that no month
//! collapses to zero, then normalized to sum to one.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: usize = 12;

/// Lowest raw (pre-normalization) weight any month can take
pub const MIN_RAW_WEIGHT: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityCurve {
    /// Busiest month, 1 = January (wraps modulo 12)
    pub peak_month: u32,
    /// Relative swing around the mean month
    pub amplitude: f64,
}

impl SeasonalityCurve {
    pub fn new(peak_month: u32, amplitude: f64) -> Self {
        Self { peak_month, amplitude }
    }

    /// Zero-based index of the peak month. Month 0 wraps to December.
    pub fn peak_index(&self) -> usize {
        (self.peak_month as i64 - 1).rem_euclid(MONTHS_PER_YEAR as i64) as usize
    }

    /// Zero-based index of the trough, six months after the peak
    pub fn trough_index(&self) -> usize {
        (self.peak_index() + MONTHS_PER_YEAR / 2) % MONTHS_PER_YEAR
    }

    /// Twelve positive weights, January first, summing to one
    pub fn weights(&self) -> [f64; MONTHS_PER_YEAR] {
        let peak = self.peak_index() as f64;
        let mut raw = [0.0; MONTHS_PER_YEAR];
        for (m, w) in raw.iter_mut().enumerate() {
            let angle = 2.0 * PI * (m as f64 - peak) / MONTHS_PER_YEAR as f64;
            *w = (1.0 + self.amplitude * angle.cos()).max(MIN_RAW_WEIGHT);
        }

        let total: f64 = raw.iter().sum();
        raw.map(|w| w / total)
    }
}

impl Default for SeasonalityCurve {
    fn default() -> Self {
        Self::new(7, 0.20)
    }
}
