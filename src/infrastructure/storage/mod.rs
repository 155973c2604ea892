//! Storage implementations

mod memory;
pub mod seed;

pub use memory::{
    InMemoryAddressRepository, InMemoryReservationRepository, InMemorySiteRepository,
    InMemoryStationRepository, InMemoryStore, InMemoryTariffRepository,
};
pub use seed::SeedData;
