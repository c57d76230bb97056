//! Insurance layer: stays to policies, premiums and claims
//!
//! Shared by both volume strategies. The layer trusts its inputs: ranges are
//! checked where assumptions enter the system, never here.

use serde::{Deserialize, Serialize};

use super::guarded::ratio;
use crate::assumptions::InsuranceAssumptions;

/// Insurance P&L for a given number of stays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsuranceEstimate {
    pub policies: f64,
    pub gross_revenue: f64,
    pub claims: f64,
    /// Gross revenue less claims; negative when claims exceed premiums
    pub net_revenue: f64,
    /// Claims over gross revenue; `None` when no premium is collected
    pub loss_ratio: Option<f64>,
}

impl InsuranceEstimate {
    pub const ZERO: Self = Self {
        policies: 0.0,
        gross_revenue: 0.0,
        claims: 0.0,
        net_revenue: 0.0,
        loss_ratio: None,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsuranceLayer {
    assumptions: InsuranceAssumptions,
}

impl InsuranceLayer {
    pub fn new(assumptions: InsuranceAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &InsuranceAssumptions {
        &self.assumptions
    }

    /// Evaluate the product over `stays` insurable stays
    pub fn evaluate(&self, stays: f64) -> InsuranceEstimate {
        let a = &self.assumptions;
        let policies = stays * a.take_rate;
        let gross_revenue = policies * a.price_per_stay;
        let claims = policies * a.claim_rate * a.avg_claim_cost;

        InsuranceEstimate {
            policies,
            gross_revenue,
            claims,
            net_revenue: gross_revenue - claims,
            loss_ratio: ratio(claims, gross_revenue),
        }
    }
}
