//! Insurance product assumptions: price, take rate and claims experience

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Per-stay insurance product terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsuranceAssumptions {
    /// Premium charged per insured stay
    #[serde(default = "default_price_per_stay")]
    pub price_per_stay: f64,

    /// Fraction of stays that buy the cover (also used as attach rate)
    #[serde(default = "default_take_rate")]
    pub take_rate: f64,

    /// Fraction of policies that produce a claim
    #[serde(default = "default_claim_rate")]
    pub claim_rate: f64,

    /// Average cost of one claim
    #[serde(default = "default_avg_claim_cost")]
    pub avg_claim_cost: f64,
}

fn default_price_per_stay() -> f64 { 18.0 }
fn default_take_rate() -> f64 { 0.18 }
fn default_claim_rate() -> f64 { 0.06 }
fn default_avg_claim_cost() -> f64 { 220.0 }

impl Default for InsuranceAssumptions {
    fn default() -> Self {
        Self {
            price_per_stay: 18.0,
            take_rate: 0.18,       // 18% of stays
            claim_rate: 0.06,      // 6% of policies
            avg_claim_cost: 220.0,
        }
    }
}

impl InsuranceAssumptions {
    /// Expected claims cost per policy sold
    pub fn expected_claim_per_policy(&self) -> f64 {
        self.claim_rate * self.avg_claim_cost
    }

    /// Check the boundary ranges accepted from callers
    pub fn validate(&self) -> Result<()> {
        if !(self.price_per_stay.is_finite() && self.price_per_stay >= 0.0) {
            return Err(PlanError::invalid("price_per_stay", self.price_per_stay, "must be non-negative"));
        }
        if !(0.0..=1.0).contains(&self.take_rate) {
            return Err(PlanError::invalid("take_rate", self.take_rate, "must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.claim_rate) {
            return Err(PlanError::invalid("claim_rate", self.claim_rate, "must be in [0, 1]"));
        }
        if !(self.avg_claim_cost.is_finite() && self.avg_claim_cost >= 0.0) {
            return Err(PlanError::invalid("avg_claim_cost", self.avg_claim_cost, "must be non-negative"));
        }
        Ok(())
    }
}
