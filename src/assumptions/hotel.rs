//! Hotel-side assumptions used to turn annual revenue into stays

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Nights in the capacity year
pub const NIGHTS_PER_YEAR: f64 = 365.0;

/// Largest property size accepted at the input boundary
pub const MAX_ROOMS: u32 = 20_000;

/// Operational assumptions: rooms, occupancy and length of stay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotelAssumptions {
    /// Number of rooms in the property
    #[serde(default = "default_rooms")]
    pub rooms: u32,

    /// Share of capacity sold over the year (0.72 = 72%)
    #[serde(default = "default_occupancy")]
    pub occupancy: f64,

    /// Average nights per stay
    #[serde(default = "default_avg_stay_nights")]
    pub avg_stay_nights: f64,
}

fn default_rooms() -> u32 { 120 }
fn default_occupancy() -> f64 { 0.72 }
fn default_avg_stay_nights() -> f64 { 2.4 }

impl Default for HotelAssumptions {
    fn default() -> Self {
        Self {
            rooms: 120,
            occupancy: 0.72,         // 72% of room-nights sold
            avg_stay_nights: 2.4,
        }
    }
}

impl HotelAssumptions {
    /// Room-nights available over one year
    pub fn room_nights_capacity(&self) -> f64 {
        self.rooms as f64 * NIGHTS_PER_YEAR
    }

    /// Check the boundary ranges accepted from callers
    pub fn validate(&self) -> Result<()> {
        if self.rooms == 0 || self.rooms > MAX_ROOMS {
            return Err(PlanError::invalid(
                "rooms",
                self.rooms as f64,
                format!("must be between 1 and {}", MAX_ROOMS),
            ));
        }
        if !(self.occupancy > 0.0 && self.occupancy <= 1.0) {
            return Err(PlanError::invalid("occupancy", self.occupancy, "must be in (0, 1]"));
        }
        if !(self.avg_stay_nights.is_finite() && self.avg_stay_nights > 0.0) {
            return Err(PlanError::invalid("avg_stay_nights", self.avg_stay_nights, "must be positive"));
        }
        Ok(())
    }
}

/// Simplified assumption: one average revenue figure per stay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectAssumptions {
    /// Hotel revenue generated by an average stay
    #[serde(default = "default_avg_revenue_per_stay")]
    pub avg_revenue_per_stay: f64,
}

fn default_avg_revenue_per_stay() -> f64 { 300.0 }

impl Default for DirectAssumptions {
    fn default() -> Self {
        Self { avg_revenue_per_stay: 300.0 }
    }
}

impl DirectAssumptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.avg_revenue_per_stay.is_finite() && self.avg_revenue_per_stay > 0.0) {
            return Err(PlanError::invalid(
                "avg_revenue_per_stay",
                self.avg_revenue_per_stay,
                "must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let hotel = HotelAssumptions::default();
        assert_eq!(hotel.room_nights_capacity(), 43_800.0);
    }

    #[test]
    fn test_validate_ranges() {
        assert!(HotelAssumptions::default().validate().is_ok());

        let empty = HotelAssumptions { rooms: 0, ..Default::default() };
        assert!(empty.validate().is_err());

        let largest = HotelAssumptions { rooms: MAX_ROOMS, ..Default::default() };
        assert!(largest.validate().is_ok());

        let closed = HotelAssumptions { occupancy: 0.0, ..Default::default() };
        assert!(closed.validate().is_err());

        let overbooked = HotelAssumptions { occupancy: 1.2, ..Default::default() };
        assert!(overbooked.validate().is_err());

        let no_stay = HotelAssumptions { avg_stay_nights: 0.0, ..Default::default() };
        assert!(no_stay.validate().is_err());

        let direct = DirectAssumptions { avg_revenue_per_stay: 0.0 };
        assert!(direct.validate().is_err());
    }

    #[test]
    fn test_room_limit_message_follows_constant() {
        let oversized = HotelAssumptions { rooms: MAX_ROOMS + 1, ..Default::default() };
        match oversized.validate() {
            Err(PlanError::InvalidAssumption { field, reason, .. }) => {
                assert_eq!(field, "rooms");
                assert_eq!(reason, format!("must be between 1 and {}", MAX_ROOMS));
            }
            other => panic!("expected an invalid rooms error, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_defaults() {
        let hotel: HotelAssumptions = serde_json::from_str(r#"{"rooms": 80}"#).unwrap();
        assert_eq!(hotel.rooms, 80);
        assert_eq!(hotel.occupancy, 0.72);
        assert_eq!(hotel.avg_stay_nights, 2.4);
    }
}
