//! Projection engine: point estimate plus monthly and annual tables

use serde::{Deserialize, Serialize};

use super::annual::AnnualTable;
use super::monthly::MonthlyTable;
use crate::assumptions::{InsuranceAssumptions, ProjectionAssumptions, ScenarioConfig};
use crate::model::{guarded::ratio, InsuranceLayer, PointEstimate, SeasonalityCurve, VolumeStrategy};

/// Everything computed for one company under one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub strategy: String,
    pub point: PointEstimate,
    pub monthly: MonthlyTable,
    pub annual: AnnualTable,
}

/// Totals over the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub horizon_years: u32,
    pub total_hotel_revenue: f64,
    pub total_policies: f64,
    pub total_gross_insurance_revenue: f64,
    pub total_claims: f64,
    pub total_net_insurance_revenue: f64,
    pub horizon_loss_ratio: Option<f64>,
}

impl PlanResult {
    pub fn summary(&self) -> PlanSummary {
        let rows = &self.annual.rows;
        let total_gross: f64 = rows.iter().map(|r| r.gross_insurance_revenue).sum();
        let total_claims: f64 = rows.iter().map(|r| r.claims).sum();

        PlanSummary {
            horizon_years: rows.len() as u32,
            total_hotel_revenue: rows.iter().map(|r| r.hotel_revenue).sum(),
            total_policies: rows.iter().map(|r| r.policies).sum(),
            total_gross_insurance_revenue: total_gross,
            total_claims,
            total_net_insurance_revenue: rows.iter().map(|r| r.net_insurance_revenue).sum(),
            horizon_loss_ratio: ratio(total_claims, total_gross),
        }
    }
}

/// Stateless engine: every call recomputes from the configured assumptions
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    strategy: VolumeStrategy,
    layer: InsuranceLayer,
    projection: ProjectionAssumptions,
}

impl ProjectionEngine {
    pub fn new(
        strategy: VolumeStrategy,
        insurance: InsuranceAssumptions,
        projection: ProjectionAssumptions,
    ) -> Self {
        Self {
            strategy,
            layer: InsuranceLayer::new(insurance),
            projection,
        }
    }

    pub fn from_scenario(scenario: &ScenarioConfig) -> Self {
        Self::new(scenario.strategy, scenario.insurance, scenario.projection)
    }

    pub fn strategy(&self) -> &VolumeStrategy {
        &self.strategy
    }

    pub fn seasonality(&self) -> SeasonalityCurve {
        SeasonalityCurve::new(self.projection.peak_month, self.projection.seasonality_amplitude)
    }

    /// Annual economics for a year of hotel revenue
    pub fn point_estimate(&self, annual_revenue: f64) -> PointEstimate {
        PointEstimate::evaluate(annual_revenue, &self.strategy, &self.layer)
    }

    /// Year-1 seasonal breakdown of a point estimate
    pub fn monthly(&self, point: &PointEstimate) -> MonthlyTable {
        MonthlyTable::build(point, &self.seasonality())
    }

    /// Growth projection of a point estimate over the horizon
    pub fn annual(&self, point: &PointEstimate) -> AnnualTable {
        AnnualTable::build(point, &self.projection, &self.layer)
    }

    /// Run the full plan for one company
    pub fn project(&self, annual_revenue: f64) -> PlanResult {
        let point = self.point_estimate(annual_revenue);
        let monthly = self.monthly(&point);
        let annual = self.annual(&point);
        log::debug!(
            "Projected {} months and {} years ({} strategy)",
            monthly.len(),
            annual.len(),
            self.strategy.name()
        );

        PlanResult {
            strategy: self.strategy.name().to_string(),
            point,
            monthly,
            annual,
        }
    }
}
