//! Station aggregate
//!
//! Contains the Station entity, coordinates, proximity filtering, and
//! repository interface.

pub mod geo;
pub mod model;
pub mod repository;

pub use geo::{distance_m, nearby, EARTH_RADIUS_M};
pub use model::{Coordinate, GeoPoint, Station, StationStatus};
pub use repository::StationRepository;
