//! Value Objects - Immutable, identity-less domain primitives

mod delivery_time;
mod email_address;
mod geo_location;
mod location;
mod transport_mode;

pub use delivery_time::DeliveryTime;
pub use email_address::EmailAddress;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use location::{Location, LocationInput};
pub use transport_mode::{ModeSpec, TransportMode};
