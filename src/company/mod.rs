//! Company datasets: records, zone vocabulary, CSV loading and lookup

mod data;
pub mod catalog;
pub mod loader;
pub mod zone;

pub use catalog::{normalize_companies, CachedCompanySource, CompanySource, DatasetCatalog};
pub use data::{CompanyRecord, Scope, HOTEL_MARKET, HOTEL_VERTICAL, REVENUE_UNIT};
pub use loader::{load_companies, load_companies_from_reader};
pub use zone::{zone_label, Zone, ZoneSelection};

use crate::error::{PlanError, Result};

/// Find a company by exact name within the loaded scope
pub fn select_company<'a>(
    companies: &'a [CompanyRecord],
    name: &str,
    scope: &Scope,
) -> Result<&'a CompanyRecord> {
    companies
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| PlanError::SelectionNotFound {
            name: name.to_string(),
            scope: scope.to_string(),
        })
}

/// The requested company, or the largest one when none is requested.
/// `Ok(None)` only when the scope has no companies at all.
pub fn resolve_company<'a>(
    companies: &'a [CompanyRecord],
    name: Option<&str>,
    scope: &Scope,
) -> Result<Option<&'a CompanyRecord>> {
    if companies.is_empty() {
        return Ok(None);
    }
    match name {
        Some(name) => select_company(companies, name, scope).map(Some),
        None => Ok(companies.first()),
    }
}
