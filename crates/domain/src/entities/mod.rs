//! Domain entities - Request-scoped results

mod delivery_estimate;
mod distance_result;

pub use delivery_estimate::{DeliveryEstimate, EstimateMethod};
pub use distance_result::DistanceResult;
