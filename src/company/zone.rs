//! Zone vocabulary: user-facing scope labels and dataset zone identifiers

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Geographic zone a dataset file covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Europe,
    France,
}

impl Zone {
    /// Identifier used in dataset file names
    pub fn id(&self) -> &'static str {
        match self {
            Zone::Europe => "europe",
            Zone::France => "france",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Europe => "Europe",
            Zone::France => "France",
        }
    }
}

/// Zone choices offered to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneSelection {
    #[default]
    France,
    Europe,
    EuropeAndFrance,
}

impl ZoneSelection {
    pub const ALL: [ZoneSelection; 3] = [
        ZoneSelection::France,
        ZoneSelection::Europe,
        ZoneSelection::EuropeAndFrance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ZoneSelection::France => "France",
            ZoneSelection::Europe => "Europe",
            ZoneSelection::EuropeAndFrance => "Europe + France",
        }
    }

    /// Dataset zones covered by this choice
    pub fn zones(&self) -> BTreeSet<Zone> {
        match self {
            ZoneSelection::France => BTreeSet::from([Zone::France]),
            ZoneSelection::Europe => BTreeSet::from([Zone::Europe]),
            ZoneSelection::EuropeAndFrance => BTreeSet::from([Zone::Europe, Zone::France]),
        }
    }

    /// Reverse lookup from a zone set
    pub fn from_zones(zones: &BTreeSet<Zone>) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.zones() == *zones)
    }
}

impl fmt::Display for ZoneSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ZoneSelection {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "france" => Ok(ZoneSelection::France),
            "europe" => Ok(ZoneSelection::Europe),
            "europe+france" | "france+europe" => Ok(ZoneSelection::EuropeAndFrance),
            _ => Err(PlanError::UnknownZone(s.to_string())),
        }
    }
}

/// Display label for any zone set
pub fn zone_label(zones: &BTreeSet<Zone>) -> String {
    match ZoneSelection::from_zones(zones) {
        Some(selection) => selection.label().to_string(),
        None if zones.is_empty() => "no zone".to_string(),
        None => zones.iter().map(Zone::label).collect::<Vec<_>>().join(" + "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_labels() {
        for selection in ZoneSelection::ALL {
            let parsed: ZoneSelection = selection.label().parse().unwrap();
            assert_eq!(parsed, selection);
            assert_eq!(zone_label(&selection.zones()), selection.label());
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("europe+france".parse::<ZoneSelection>().unwrap(), ZoneSelection::EuropeAndFrance);
        assert_eq!(" FRANCE ".parse::<ZoneSelection>().unwrap(), ZoneSelection::France);
        assert!(matches!(
            "Asia".parse::<ZoneSelection>(),
            Err(PlanError::UnknownZone(label)) if label == "Asia"
        ));
    }

    #[test]
    fn test_zone_ids_sorted() {
        let ids: Vec<&str> = ZoneSelection::EuropeAndFrance.zones().iter().map(Zone::id).collect();
        assert_eq!(ids, vec!["europe", "france"]);
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(zone_label(&BTreeSet::new()), "no zone");
    }
}
