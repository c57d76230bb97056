//! Error types for the business plan model
//!
//! Undefined ratios (zero occupancy, zero gross revenue, ...) are not errors:
//! they surface as `None` on the affected field. Errors are reserved for
//! caller mistakes and dataset load failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Company not found: '{name}' is not in scope {scope}")]
    SelectionNotFound { name: String, scope: String },

    #[error("Unknown zone label: '{0}' (expected France, Europe or Europe + France)")]
    UnknownZone(String),

    #[error("Invalid assumption: {field} = {value} ({reason})")]
    InvalidAssumption {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("Dataset error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    Scenario(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: impl Into<String>) -> Self {
        PlanError::InvalidAssumption { field, value, reason: reason.into() }
    }

    /// True when the error means the caller asked for something absent,
    /// as opposed to data that could not be read.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, PlanError::SelectionNotFound { .. } | PlanError::UnknownZone(_))
    }
}
