//! CSV export of the monthly and annual tables

use std::io::Write;

use serde::Serialize;

use super::annual::AnnualTable;
use super::monthly::MonthlyTable;
use crate::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct MonthlyCsvRow {
    month: &'static str,
    weight: f64,
    hotel_revenue: f64,
    room_nights_sold: Option<f64>,
    stays: f64,
    policies: f64,
    gross_insurance_revenue: f64,
    claims: f64,
    net_insurance_revenue: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct AnnualCsvRow {
    year: u32,
    hotel_revenue: f64,
    room_nights_sold: Option<f64>,
    stays: f64,
    policies: f64,
    gross_insurance_revenue: f64,
    claims: f64,
    net_insurance_revenue: f64,
    loss_ratio: Option<f64>,
}

/// Write the monthly table; undefined room-nights become empty cells
pub fn write_monthly_csv<W: Write>(table: &MonthlyTable, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in &table.rows {
        csv.serialize(MonthlyCsvRow {
            month: row.label(),
            weight: row.weight,
            hotel_revenue: row.hotel_revenue,
            room_nights_sold: row.room_nights_sold,
            stays: row.stays,
            policies: row.policies,
            gross_insurance_revenue: row.gross_insurance_revenue,
            claims: row.claims,
            net_insurance_revenue: row.net_insurance_revenue,
        })?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the annual table; undefined ratios become empty cells
pub fn write_annual_csv<W: Write>(table: &AnnualTable, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in &table.rows {
        csv.serialize(AnnualCsvRow {
            year: row.year,
            hotel_revenue: row.hotel_revenue,
            room_nights_sold: row.room_nights_sold,
            stays: row.stays,
            policies: row.policies,
            gross_insurance_revenue: row.gross_insurance_revenue,
            claims: row.claims,
            net_insurance_revenue: row.net_insurance_revenue,
            loss_ratio: row.loss_ratio,
        })?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{ProjectionAssumptions, ScenarioConfig};
    use crate::projection::ProjectionEngine;

    #[test]
    fn test_monthly_csv_layout() {
        let plan = ProjectionEngine::from_scenario(&ScenarioConfig::default()).project(1_000_000.0);
        let mut buf = Vec::new();
        write_monthly_csv(&plan.monthly, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "Month,Weight,HotelRevenue,RoomNightsSold,Stays,Policies,GrossInsuranceRevenue,Claims,NetInsuranceRevenue"
        );
        assert!(lines[1].starts_with("Jan,"));
        assert!(lines[12].starts_with("Dec,"));
    }

    #[test]
    fn test_annual_csv_rows() {
        let scenario = ScenarioConfig {
            projection: ProjectionAssumptions { horizon_years: 5, ..Default::default() },
            ..Default::default()
        };
        let plan = ProjectionEngine::from_scenario(&scenario).project(1_000_000.0);
        let mut buf = Vec::new();
        write_annual_csv(&plan.annual, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().next().unwrap().ends_with(",LossRatio"));
        assert!(text.lines().nth(5).unwrap().starts_with("5,"));
    }
}
