//! Booking service: reservation creation and lifecycle

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::billing::BillingService;
use crate::config::BillingConfig;
use crate::domain::{
    DomainError, DomainResult, EngineError, RepositoryProvider, Reservation, ReservationStatus,
    TimeWindow,
};

/// Service for reservation operations
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
    billing: BillingService,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, config: &BillingConfig) -> Self {
        Self {
            billing: BillingService::new(repos.clone(), config),
            repos,
        }
    }

    /// Reserve `station_id` for `user_id` during `[start, end)`.
    ///
    /// The reservation is priced first; nothing is stored when pricing fails.
    /// Fails with `Conflict` when another blocking reservation holds the slot.
    pub async fn book(
        &self,
        user_id: i64,
        station_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<Reservation> {
        let result = self.try_book(user_id, station_id, start, end).await;

        let outcome = match &result {
            Ok(_) => "booked",
            Err(e) => outcome_label(e),
        };
        metrics::counter!("bookings_total", "outcome" => outcome).increment(1);

        match &result {
            Ok(reservation) => info!(
                reservation_id = reservation.id,
                reference = %reservation.reference,
                station_id,
                user_id,
                total_cost = %reservation.total_cost,
                "Reservation created"
            ),
            Err(e) => warn!(station_id, user_id, %start, %end, error = %e, "Booking refused"),
        }
        result
    }

    async fn try_book(
        &self,
        user_id: i64,
        station_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> DomainResult<Reservation> {
        let window = TimeWindow::new(start, end)?;

        let station = self
            .repos
            .stations()
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Station", "id", station_id))?;
        if !station.is_active() {
            return Err(DomainError::Validation(format!(
                "station {} is {} and cannot be booked",
                station_id, station.status
            )));
        }

        let quote = self.billing.quote(station_id, start, end).await?;

        let id = self.repos.reservations().next_id().await;
        let reservation = Reservation::new(
            id,
            station_id,
            user_id,
            window,
            quote.rate_per_minute,
            quote.breakdown.total,
        );
        self.repos
            .reservations()
            .insert_if_available(reservation.clone())
            .await?;
        Ok(reservation)
    }

    pub async fn find(&self, reservation_id: i64) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", "id", reservation_id))
    }

    /// Owner confirms a requested reservation
    pub async fn accept(&self, reservation_id: i64) -> DomainResult<Reservation> {
        self.transition(reservation_id, ReservationStatus::Accepted).await
    }

    /// Owner declines a requested reservation; the slot is released
    pub async fn refuse(&self, reservation_id: i64) -> DomainResult<Reservation> {
        self.transition(reservation_id, ReservationStatus::Refused).await
    }

    /// User withdraws; the slot is released
    pub async fn cancel(&self, reservation_id: i64) -> DomainResult<Reservation> {
        self.transition(reservation_id, ReservationStatus::Cancelled).await
    }

    pub async fn complete(&self, reservation_id: i64) -> DomainResult<Reservation> {
        self.transition(reservation_id, ReservationStatus::Completed).await
    }

    async fn transition(
        &self,
        reservation_id: i64,
        next: ReservationStatus,
    ) -> DomainResult<Reservation> {
        let reservation = self
            .repos
            .reservations()
            .transition(reservation_id, next)
            .await?;

        info!(
            reservation_id,
            station_id = reservation.station_id,
            status = %next,
            "Reservation status changed"
        );
        Ok(reservation)
    }
}

fn outcome_label(err: &DomainError) -> &'static str {
    match err {
        DomainError::Conflict(_) => "conflict",
        DomainError::NotFound { .. } => "not_found",
        DomainError::Validation(_) => "invalid",
        DomainError::Engine(EngineError::InvalidWindow { .. }) => "invalid",
        DomainError::Engine(EngineError::TariffGap { .. }) => "no_tariff",
    }
}

// ── Tests ──────────────────────────────────────────────────────
