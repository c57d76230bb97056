//! Annual point estimate: the full revenue → stays → insurance chain

use serde::{Deserialize, Serialize};

use super::insurance::{InsuranceEstimate, InsuranceLayer};
use super::volume::{VolumeEstimate, VolumeStrategy};

/// One year of hotel volume and insurance economics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointEstimate {
    pub hotel_revenue: f64,
    pub room_nights_sold: Option<f64>,
    pub implied_adr: Option<f64>,
    pub stays: f64,
    pub policies: f64,
    pub gross_insurance_revenue: f64,
    pub claims: f64,
    pub net_insurance_revenue: f64,
    pub loss_ratio: Option<f64>,
}

impl PointEstimate {
    /// Assemble a point estimate from its volume and insurance parts
    pub fn from_parts(hotel_revenue: f64, volume: VolumeEstimate, insurance: InsuranceEstimate) -> Self {
        Self {
            hotel_revenue,
            room_nights_sold: volume.room_nights_sold,
            implied_adr: volume.implied_adr,
            stays: volume.stays,
            policies: insurance.policies,
            gross_insurance_revenue: insurance.gross_revenue,
            claims: insurance.claims,
            net_insurance_revenue: insurance.net_revenue,
            loss_ratio: insurance.loss_ratio,
        }
    }

    /// Run the conversion chain for one year of hotel revenue
    pub fn evaluate(hotel_revenue: f64, strategy: &VolumeStrategy, layer: &InsuranceLayer) -> Self {
        let volume = strategy.convert(hotel_revenue);
        let insurance = layer.evaluate(volume.stays);
        log::debug!(
            "{} chain: revenue={:.2} stays={:.2} policies={:.2} net={:.2}",
            strategy.name(),
            hotel_revenue,
            volume.stays,
            insurance.policies,
            insurance.net_revenue
        );
        Self::from_parts(hotel_revenue, volume, insurance)
    }

    pub fn volume(&self) -> VolumeEstimate {
        VolumeEstimate {
            room_nights_sold: self.room_nights_sold,
            implied_adr: self.implied_adr,
            stays: self.stays,
        }
    }

    pub fn insurance(&self) -> InsuranceEstimate {
        InsuranceEstimate {
            policies: self.policies,
            gross_revenue: self.gross_insurance_revenue,
            claims: self.claims,
            net_revenue: self.net_insurance_revenue,
            loss_ratio: self.loss_ratio,
        }
    }
}
