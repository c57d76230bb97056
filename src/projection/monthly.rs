//! Year-1 monthly table: the annual point estimate spread over the seasonal curve

use serde::{Deserialize, Serialize};

use crate::format::month_abbrev;
use crate::model::{PointEstimate, SeasonalityCurve};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRow {
    /// Calendar month, 1 = January
    pub month: u32,
    pub weight: f64,
    pub hotel_revenue: f64,
    pub room_nights_sold: Option<f64>,
    pub stays: f64,
    pub policies: f64,
    pub gross_insurance_revenue: f64,
    pub claims: f64,
    pub net_insurance_revenue: f64,
}

impl MonthlyRow {
    fn from_point(month: u32, weight: f64, point: &PointEstimate) -> Self {
        Self {
            month,
            weight,
            hotel_revenue: point.hotel_revenue * weight,
            room_nights_sold: point.room_nights_sold.map(|n| n * weight),
            stays: point.stays * weight,
            policies: point.policies * weight,
            gross_insurance_revenue: point.gross_insurance_revenue * weight,
            claims: point.claims * weight,
            net_insurance_revenue: point.net_insurance_revenue * weight,
        }
    }

    /// Three-letter month name
    pub fn label(&self) -> &'static str {
        month_abbrev(self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTable {
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyTable {
    /// Multiply every annual field by each month's seasonal weight
    pub fn build(point: &PointEstimate, curve: &SeasonalityCurve) -> Self {
        let rows = curve
            .weights()
            .iter()
            .zip(1u32..)
            .map(|(&weight, month)| MonthlyRow::from_point(month, weight, point))
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row with the highest weight
    pub fn peak(&self) -> Option<&MonthlyRow> {
        self.rows.iter().max_by(|a, b| a.weight.total_cmp(&b.weight))
    }

    /// Column sums; matches the annual point estimate up to rounding
    pub fn totals(&self) -> MonthlyRow {
        let mut total = MonthlyRow {
            month: 0,
            weight: 0.0,
            hotel_revenue: 0.0,
            room_nights_sold: None,
            stays: 0.0,
            policies: 0.0,
            gross_insurance_revenue: 0.0,
            claims: 0.0,
            net_insurance_revenue: 0.0,
        };
        for row in &self.rows {
            total.weight += row.weight;
            total.hotel_revenue += row.hotel_revenue;
            if let Some(n) = row.room_nights_sold {
                total.room_nights_sold = Some(total.room_nights_sold.unwrap_or(0.0) + n);
            }
            total.stays += row.stays;
            total.policies += row.policies;
            total.gross_insurance_revenue += row.gross_insurance_revenue;
            total.claims += row.claims;
            total.net_insurance_revenue += row.net_insurance_revenue;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::InsuranceAssumptions;
    use crate::model::{InsuranceLayer, VolumeStrategy};
    use approx::assert_relative_eq;

    fn point() -> PointEstimate {
        let layer = InsuranceLayer::new(InsuranceAssumptions::default());
        PointEstimate::evaluate(50_000_000.0, &VolumeStrategy::default(), &layer)
    }

    #[test]
    fn test_months_sum_to_annual() {
        let point = point();
        let table = MonthlyTable::build(&point, &SeasonalityCurve::new(7, 0.45));
        let totals = table.totals();

        assert_eq!(table.len(), 12);
        assert_relative_eq!(totals.weight, 1.0, epsilon = 1e-9);
        assert_relative_eq!(totals.hotel_revenue, point.hotel_revenue, max_relative = 1e-6);
        assert_relative_eq!(
            totals.room_nights_sold.unwrap(),
            point.room_nights_sold.unwrap(),
            max_relative = 1e-6
        );
        assert_relative_eq!(totals.stays, point.stays, max_relative = 1e-6);
        assert_relative_eq!(totals.policies, point.policies, max_relative = 1e-6);
        assert_relative_eq!(
            totals.gross_insurance_revenue,
            point.gross_insurance_revenue,
            max_relative = 1e-6
        );
        assert_relative_eq!(totals.claims, point.claims, max_relative = 1e-6);
        assert_relative_eq!(
            totals.net_insurance_revenue,
            point.net_insurance_revenue,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_rows_are_ordered_and_labelled() {
        let table = MonthlyTable::build(&point(), &SeasonalityCurve::default());
        let months: Vec<u32> = table.rows.iter().map(|r| r.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
        assert_eq!(table.rows[0].label(), "Jan");
        assert_eq!(table.rows[11].label(), "Dec");
        assert_eq!(table.peak().map(|r| r.month), Some(7));
    }

    #[test]
    fn test_direct_strategy_has_no_room_nights() {
        let layer = InsuranceLayer::new(InsuranceAssumptions::default());
        let direct = VolumeStrategy::Direct(Default::default());
        let point = PointEstimate::evaluate(3_000_000.0, &direct, &layer);
        let table = MonthlyTable::build(&point, &SeasonalityCurve::default());

        assert!(table.rows.iter().all(|r| r.room_nights_sold.is_none()));
        assert_eq!(table.totals().room_nights_sold, None);
    }
}
