//! Domain services
//!
//! Logic spanning several aggregates. Pure and synchronous: inputs come
//! from the lookup ports, nothing is written.

pub mod availability_search;

pub use availability_search::{find_available, find_available_nearby};
