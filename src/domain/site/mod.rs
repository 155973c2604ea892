//! Site aggregate

pub mod model;
pub mod repository;

pub use model::{Address, Site};
pub use repository::{AddressRepository, SiteRepository};
