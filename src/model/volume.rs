//! Revenue to volume conversion
//!
//! Two interchangeable strategies turn annual hotel revenue into a count of
//! stays. The strategy is picked explicitly by the caller's scenario.

use serde::{Deserialize, Serialize};

use super::guarded::{ratio, ratio_or_zero};
use crate::assumptions::{DirectAssumptions, HotelAssumptions};
use crate::error::Result;

/// Operational volume behind one year of hotel revenue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeEstimate {
    /// Room-nights sold (operational strategy only)
    pub room_nights_sold: Option<f64>,
    /// Revenue per room-night sold; `None` when no nights are sold
    pub implied_adr: Option<f64>,
    /// Number of stays (bookings)
    pub stays: f64,
}

impl VolumeEstimate {
    /// Volume scaled by a revenue multiple, holding ADR and conversion fixed
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            room_nights_sold: self.room_nights_sold.map(|n| n * factor),
            implied_adr: self.implied_adr,
            stays: self.stays * factor,
        }
    }
}

/// Revenue-to-stays conversion strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum VolumeStrategy {
    /// Rooms × 365 × occupancy gives room-nights; stays follow from length of stay
    Operational(HotelAssumptions),
    /// Revenue divided by an average revenue per stay
    Direct(DirectAssumptions),
}

impl Default for VolumeStrategy {
    fn default() -> Self {
        VolumeStrategy::Operational(HotelAssumptions::default())
    }
}

impl VolumeStrategy {
    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            VolumeStrategy::Operational(_) => "operational",
            VolumeStrategy::Direct(_) => "direct",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            VolumeStrategy::Operational(hotel) => hotel.validate(),
            VolumeStrategy::Direct(direct) => direct.validate(),
        }
    }

    /// Convert annual hotel revenue into annual volume
    pub fn convert(&self, annual_revenue: f64) -> VolumeEstimate {
        match self {
            VolumeStrategy::Operational(hotel) => operational(annual_revenue, hotel),
            VolumeStrategy::Direct(direct) => direct_volume(annual_revenue, direct),
        }
    }
}

fn operational(annual_revenue: f64, hotel: &HotelAssumptions) -> VolumeEstimate {
    let room_nights_sold = if hotel.occupancy > 0.0 {
        hotel.room_nights_capacity() * hotel.occupancy
    } else {
        0.0
    };

    VolumeEstimate {
        room_nights_sold: Some(room_nights_sold),
        implied_adr: ratio(annual_revenue, room_nights_sold),
        stays: ratio_or_zero(room_nights_sold, hotel.avg_stay_nights),
    }
}

fn direct_volume(annual_revenue: f64, direct: &DirectAssumptions) -> VolumeEstimate {
    VolumeEstimate {
        room_nights_sold: None,
        implied_adr: None,
        stays: ratio_or_zero(annual_revenue, direct.avg_revenue_per_stay),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_operational_chain() {
        let strategy = VolumeStrategy::Operational(HotelAssumptions {
            rooms: 120,
            occupancy: 0.72,
            avg_stay_nights: 2.4,
        });
        let volume = strategy.convert(50_000_000.0);

        assert_relative_eq!(volume.room_nights_sold.unwrap(), 31_536.0, max_relative = 1e-12);
        assert_relative_eq!(volume.stays, 13_140.0, max_relative = 1e-12);
        assert_relative_eq!(
            volume.implied_adr.unwrap(),
            50_000_000.0 / 31_536.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_operational_identities() {
        for &(rooms, occupancy, stay) in &[(1, 0.1, 1.0), (45, 0.55, 3.7), (20_000, 0.98, 14.0)] {
            let hotel = HotelAssumptions { rooms, occupancy, avg_stay_nights: stay };
            let volume = VolumeStrategy::Operational(hotel).convert(1_234_567.0);
            let nights = volume.room_nights_sold.unwrap();

            assert_relative_eq!(nights, rooms as f64 * 365.0 * occupancy, max_relative = 1e-12);
            assert_relative_eq!(volume.stays * stay, nights, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_occupancy() {
        let hotel = HotelAssumptions { occupancy: 0.0, ..Default::default() };
        let volume = VolumeStrategy::Operational(hotel).convert(50_000_000.0);

        assert_eq!(volume.room_nights_sold, Some(0.0));
        assert_eq!(volume.implied_adr, None);
        assert_eq!(volume.stays, 0.0);
    }

    #[test]
    fn test_zero_stay_length() {
        let hotel = HotelAssumptions { avg_stay_nights: 0.0, ..Default::default() };
        let volume = VolumeStrategy::Operational(hotel).convert(1_000_000.0);

        assert!(volume.implied_adr.is_some());
        assert_eq!(volume.stays, 0.0);
    }

    #[test]
    fn test_direct() {
        let strategy = VolumeStrategy::Direct(DirectAssumptions { avg_revenue_per_stay: 250.0 });
        let volume = strategy.convert(1_000_000.0);

        assert_eq!(volume.stays, 4_000.0);
        assert_eq!(volume.room_nights_sold, None);
        assert_eq!(volume.implied_adr, None);

        let degenerate = VolumeStrategy::Direct(DirectAssumptions { avg_revenue_per_stay: 0.0 });
        assert_eq!(degenerate.convert(1_000_000.0).stays, 0.0);
    }

    #[test]
    fn test_scaled_holds_adr() {
        let volume = VolumeStrategy::default().convert(10_000_000.0);
        let grown = volume.scaled(1.1);

        assert_eq!(grown.implied_adr, volume.implied_adr);
        assert_relative_eq!(grown.stays, volume.stays * 1.1);
        assert_relative_eq!(
            grown.room_nights_sold.unwrap(),
            volume.room_nights_sold.unwrap() * 1.1
        );
    }
}
