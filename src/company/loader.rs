//! Load company records from cleaned market CSV files

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::data::{CompanyRecord, REVENUE_UNIT};
use crate::error::Result;

/// Raw CSV row matching the cleaned dataset columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Country", default)]
    country: Option<String>,
    #[serde(rename = "Revenue_M", default)]
    revenue_m: Option<String>,
    #[serde(rename = "Sector", default)]
    sector: Option<String>,
    #[serde(rename = "Company Type", default)]
    company_type: Option<String>,
}

impl CsvRow {
    /// Rows without a name or a usable revenue figure are skipped
    fn into_record(self) -> Option<CompanyRecord> {
        let name = self.name.filter(|n| !n.is_empty())?;
        let revenue_m = self.revenue_m.as_deref().and_then(parse_revenue_m)?;

        Some(CompanyRecord {
            name,
            country: self.country.unwrap_or_default(),
            annual_revenue: revenue_m * REVENUE_UNIT,
            sector: self.sector.filter(|s| !s.is_empty()),
            company_type: self.company_type.filter(|s| !s.is_empty()),
        })
    }
}

/// Numeric revenue in millions; blanks and junk are treated as missing
fn parse_revenue_m(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Load all companies from a CSV file
pub fn load_companies<P: AsRef<Path>>(path: P) -> Result<Vec<CompanyRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    let companies = load_companies_from_reader(file)?;
    log::info!("Loaded {} companies from {}", companies.len(), path.as_ref().display());
    Ok(companies)
}

/// Load companies from any reader (e.g., string buffer, network stream)
pub fn load_companies_from_reader<R: Read>(reader: R) -> Result<Vec<CompanyRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut companies = Vec::new();
    let mut skipped = 0usize;

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        match row.into_record() {
            Some(record) => companies.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} rows without a name or numeric Revenue_M", skipped);
    }
    Ok(companies)
}
