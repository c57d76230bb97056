//! Business plan assumptions: hotel operations, insurance product and projection

mod hotel;
mod insurance;
mod projection;
mod scenario;

pub use hotel::{DirectAssumptions, HotelAssumptions, MAX_ROOMS, NIGHTS_PER_YEAR};
pub use insurance::InsuranceAssumptions;
pub use projection::{ProjectionAssumptions, MAX_SEASONALITY_AMPLITUDE, STANDARD_HORIZONS};
pub use scenario::ScenarioConfig;
