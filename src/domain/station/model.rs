//! Station domain entity

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Operational state of a charging station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationStatus {
    Active,
    Inactive,
    Maintenance,
}

impl Default for StationStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Latitude/longitude pair, stored with fixed precision.
///
/// Always within latitude [-90, 90] and longitude [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    latitude: Decimal,
    longitude: Decimal,
}

impl Coordinate {
    pub fn new(latitude: Decimal, longitude: Decimal) -> DomainResult<Self> {
        if latitude < Decimal::from(-90) || latitude > Decimal::from(90) {
            return Err(DomainError::Validation(format!(
                "latitude {} out of range [-90, 90]",
                latitude
            )));
        }
        if longitude < Decimal::from(-180) || longitude > Decimal::from(180) {
            return Err(DomainError::Validation(format!(
                "longitude {} out of range [-180, 180]",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> Decimal {
        self.latitude
    }

    pub fn longitude(&self) -> Decimal {
        self.longitude
    }

    /// Floating-point view used for trigonometry
    pub fn to_point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude.to_f64().unwrap_or_default(),
            longitude: self.longitude.to_f64().unwrap_or_default(),
        }
    }
}

/// A point in degrees, as supplied by a search request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A single charging point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub coordinate: Coordinate,
    /// Rated power in kW
    pub power_kw: Decimal,
    pub status: StationStatus,
    /// Currently plugged in
    pub occupied: bool,
    /// Free-standing post rather than wall-mounted
    pub free_standing: bool,
    pub instructions: Option<String>,
    pub site_id: i64,
}

impl Station {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        coordinate: Coordinate,
        power_kw: Decimal,
        site_id: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            coordinate,
            power_kw,
            status: StationStatus::Active,
            occupied: false,
            free_standing: true,
            instructions: None,
            site_id,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == StationStatus::Active
    }
}

// ── Tests ──────────────────────────────────────────────────────
