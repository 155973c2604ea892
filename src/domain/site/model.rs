//! Site and address entities

use serde::{Deserialize, Serialize};

/// Physical location grouping one or more stations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    /// Free-text access instructions ("Parking principal, niveau -1")
    pub instructions: String,
}

/// Postal address; the entry point of city-based lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub floor: Option<String>,
    /// Site located at this address, if any
    #[serde(default)]
    pub site_id: Option<i64>,
}

impl Address {
    /// City comparison used by lookups: trimmed, ASCII case-insensitive.
    pub fn is_in_city(&self, city: &str) -> bool {
        self.city.trim().eq_ignore_ascii_case(city.trim())
    }
}
