//! Multi-year annual table driven by compound revenue growth

use serde::{Deserialize, Serialize};

use crate::assumptions::ProjectionAssumptions;
use crate::model::guarded::ratio_or_zero;
use crate::model::{InsuranceLayer, PointEstimate};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnualRow {
    /// Projection year, 1-indexed
    pub year: u32,
    pub hotel_revenue: f64,
    pub room_nights_sold: Option<f64>,
    pub stays: f64,
    pub policies: f64,
    pub gross_insurance_revenue: f64,
    pub claims: f64,
    pub net_insurance_revenue: f64,
    pub loss_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualTable {
    pub rows: Vec<AnnualRow>,
}

impl AnnualTable {
    /// Grow year-1 revenue and volume, then re-run the insurance layer on
    /// each year's stays.
    ///
    /// Occupancy, rooms, stay length and revenue per stay are held fixed, so
    /// volume moves in proportion to revenue (constant ADR). Without positive
    /// year-1 revenue there is nothing to scale from and every year's volume
    /// is zero.
    pub fn build(point: &PointEstimate, projection: &ProjectionAssumptions, layer: &InsuranceLayer) -> Self {
        let base_volume = point.volume();
        let rows = (1..=projection.horizon_years)
            .map(|year| {
                let hotel_revenue = point.hotel_revenue * projection.growth_factor(year);
                let volume = base_volume.scaled(ratio_or_zero(hotel_revenue, point.hotel_revenue));
                let insurance = layer.evaluate(volume.stays);
                AnnualRow {
                    year,
                    hotel_revenue,
                    room_nights_sold: volume.room_nights_sold,
                    stays: volume.stays,
                    policies: insurance.policies,
                    gross_insurance_revenue: insurance.gross_revenue,
                    claims: insurance.claims,
                    net_insurance_revenue: insurance.net_revenue,
                    loss_ratio: insurance.loss_ratio,
                }
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn year(&self, year: u32) -> Option<&AnnualRow> {
        self.rows.iter().find(|r| r.year == year)
    }

    pub fn last(&self) -> Option<&AnnualRow> {
        self.rows.last()
    }
}
