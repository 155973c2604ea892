//! Domain ports
//!
//! Read accessors the engine needs from the data store. They return
//! in-memory collections; an engine call performs no further I/O.

pub mod lookup;

pub use lookup::{SiteLookup, StationLookup, TariffLookup};
