//! Reservation aggregate
//!
//! Contains the Reservation entity, the slot availability check, and the
//! repository interface.

pub mod availability;
pub mod model;
pub mod repository;

pub use availability::{conflicts, is_available};
pub use model::{Reservation, ReservationStatus};
pub use repository::ReservationRepository;
