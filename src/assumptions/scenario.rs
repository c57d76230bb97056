//! Scenario files: every assumption needed for one business plan run
//!
//! A scenario is plain JSON. Missing sections and fields fall back to the
//! standard defaults, so `{}` is a valid scenario.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{InsuranceAssumptions, ProjectionAssumptions};
use crate::error::Result;
use crate::model::VolumeStrategy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// How hotel revenue is turned into stays
    #[serde(default)]
    pub strategy: VolumeStrategy,

    #[serde(default)]
    pub insurance: InsuranceAssumptions,

    #[serde(default)]
    pub projection: ProjectionAssumptions,

    /// Symbol prefixed to monetary values in reports
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String { "€".to_string() }

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            strategy: VolumeStrategy::default(),
            insurance: InsuranceAssumptions::default(),
            projection: ProjectionAssumptions::default(),
            currency: default_currency(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let scenario = Self::from_reader(BufReader::new(file))?;
        log::info!("Loaded scenario from {}", path.as_ref().display());
        Ok(scenario)
    }

    /// Load a scenario from any reader (e.g., string buffer, request body)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Check every assumption against its accepted range
    pub fn validate(&self) -> Result<()> {
        self.strategy.validate()?;
        self.insurance.validate()?;
        self.projection.validate()?;
        Ok(())
    }
}
