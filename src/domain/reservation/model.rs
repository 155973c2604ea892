//! Reservation domain entity

use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::window::TimeWindow;
use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Reservation lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Booked by a user, awaiting the owner's decision
    Requested,
    /// Confirmed by the station owner
    Accepted,
    /// Declined by the station owner
    Refused,
    /// Withdrawn before it took place
    Cancelled,
    /// Charging session took place
    Completed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requested => "REQUESTED",
            Self::Accepted => "ACCEPTED",
            Self::Refused => "REFUSED",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Whether a reservation in this state holds its time slot.
    pub fn blocks_slot(&self) -> bool {
        !matches!(self, Self::Refused | Self::Cancelled)
    }

    fn can_become(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Requested, Accepted)
                | (Requested, Refused)
                | (Requested, Cancelled)
                | (Accepted, Completed)
                | (Accepted, Cancelled)
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A booked interval of exclusive use of a station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub id: i64,
    /// Booking reference handed to the user
    pub reference: Uuid,
    pub window: TimeWindow,
    pub status: ReservationStatus,
    /// Per-minute rate in force at the start of the reservation
    pub rate_per_minute: Decimal,
    /// Total price, rounded to the currency's minor unit
    pub total_cost: Decimal,
    pub user_id: i64,
    pub station_id: i64,
    pub created_at: NaiveDateTime,
}

impl Reservation {
    pub fn new(
        id: i64,
        station_id: i64,
        user_id: i64,
        window: TimeWindow,
        rate_per_minute: Decimal,
        total_cost: Decimal,
    ) -> Self {
        Self {
            id,
            reference: Uuid::new_v4(),
            window,
            status: ReservationStatus::Requested,
            rate_per_minute,
            total_cost,
            user_id,
            station_id,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.window.start()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.window.end()
    }

    pub fn blocks_slot(&self) -> bool {
        self.status.blocks_slot()
    }

    pub fn accept(&mut self) -> DomainResult<()> {
        self.transition(ReservationStatus::Accepted)
    }

    pub fn refuse(&mut self) -> DomainResult<()> {
        self.transition(ReservationStatus::Refused)
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        self.transition(ReservationStatus::Cancelled)
    }

    pub fn complete(&mut self) -> DomainResult<()> {
        self.transition(ReservationStatus::Completed)
    }

    pub fn transition(&mut self, next: ReservationStatus) -> DomainResult<()> {
        if !self.status.can_become(next) {
            return Err(DomainError::Validation(format!(
                "reservation {} cannot go from {} to {}",
                self.id, self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_reservation() -> Reservation {
        let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let window = TimeWindow::new(
            day.and_hms_opt(10, 0, 0).unwrap(),
            day.and_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();
        Reservation::new(1, 7, 3, window, Decimal::new(4167, 6), Decimal::new(50, 2))
    }

    #[test]
    fn new_reservation_is_requested_and_blocks() {
        let r = sample_reservation();
        assert_eq!(r.status, ReservationStatus::Requested);
        assert!(r.blocks_slot());
        assert_eq!(r.station_id, 7);
        assert_eq!(r.user_id, 3);
    }

    #[test]
    fn accept_then_complete() {
        let mut r = sample_reservation();
        r.accept().unwrap();
        assert_eq!(r.status, ReservationStatus::Accepted);
        r.complete().unwrap();
        assert_eq!(r.status, ReservationStatus::Completed);
        assert!(r.blocks_slot());
    }

    #[test]
    fn refused_and_cancelled_release_the_slot() {
        let mut refused = sample_reservation();
        refused.refuse().unwrap();
        assert!(!refused.blocks_slot());

        let mut cancelled = sample_reservation();
        cancelled.accept().unwrap();
        cancelled.cancel().unwrap();
        assert!(!cancelled.blocks_slot());
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let mut r = sample_reservation();
        assert!(matches!(r.complete(), Err(DomainError::Validation(_))));

        r.refuse().unwrap();
        assert!(r.accept().is_err());
        assert_eq!(r.status, ReservationStatus::Refused);
    }

    #[test]
    fn references_are_unique() {
        assert_ne!(sample_reservation().reference, sample_reservation().reference);
    }

    #[test]
    fn status_display() {
        assert_eq!(ReservationStatus::Requested.to_string(), "REQUESTED");
        assert_eq!(ReservationStatus::Completed.to_string(), "COMPLETED");
    }
}
