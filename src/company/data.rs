//! Company records and lookup scopes

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::zone::{zone_label, Zone};

/// Dataset revenue is expressed in millions
pub const REVENUE_UNIT: f64 = 1_000_000.0;

pub const HOTEL_MARKET: &str = "travel";
pub const HOTEL_VERTICAL: &str = "hotel";

/// One company from a market dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company name, unique within a scope
    pub name: String,

    /// Country of incorporation (may be empty)
    pub country: String,

    /// Annual revenue in currency units
    pub annual_revenue: f64,

    #[serde(default)]
    pub sector: Option<String>,

    #[serde(default)]
    pub company_type: Option<String>,
}

impl CompanyRecord {
    /// Build a record from the dataset's revenue-in-millions figure
    pub fn from_millions(name: impl Into<String>, country: impl Into<String>, revenue_m: f64) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            annual_revenue: revenue_m * REVENUE_UNIT,
            sector: None,
            company_type: None,
        }
    }

    pub fn revenue_millions(&self) -> f64 {
        self.annual_revenue / REVENUE_UNIT
    }
}

/// Lookup key for company datasets: market, vertical and zone set
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Scope {
    pub market: String,
    pub vertical: String,
    pub zones: BTreeSet<Zone>,
}

impl Scope {
    pub fn new(market: impl Into<String>, vertical: impl Into<String>, zones: BTreeSet<Zone>) -> Self {
        Self {
            market: market.into(),
            vertical: vertical.into(),
            zones,
        }
    }

    /// Hotel companies (travel / hotel) in the given zones
    pub fn hotels(zones: BTreeSet<Zone>) -> Self {
        Self::new(HOTEL_MARKET, HOTEL_VERTICAL, zones)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} in {}", self.market, self.vertical, zone_label(&self.zones))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::ZoneSelection;

    #[test]
    fn test_from_millions() {
        let record = CompanyRecord::from_millions("Accor", "France", 5_056.0);
        assert_eq!(record.annual_revenue, 5_056_000_000.0);
        assert_eq!(record.revenue_millions(), 5_056.0);
    }

    #[test]
    fn test_scope_display() {
        let scope = Scope::hotels(ZoneSelection::EuropeAndFrance.zones());
        assert_eq!(scope.to_string(), "travel/hotel in Europe + France");
    }
}
