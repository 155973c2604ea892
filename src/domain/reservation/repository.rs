//! Reservation repository interface

use async_trait::async_trait;

use super::model::{Reservation, ReservationStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert `reservation` only if its window is free on its station.
    ///
    /// The availability check and the insert form one atomic unit: two
    /// concurrent calls for overlapping windows cannot both succeed. Fails
    /// with `DomainError::Conflict` when the slot is taken.
    async fn insert_if_available(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>>;

    /// All reservations of a station, any status
    async fn find_for_station(&self, station_id: i64) -> DomainResult<Vec<Reservation>>;

    /// Move a reservation to `next` and return the stored result.
    ///
    /// The status check and the write form one atomic unit, so a transition
    /// always starts from the status currently stored.
    async fn transition(&self, id: i64, next: ReservationStatus) -> DomainResult<Reservation>;

    /// Generate next reservation ID
    async fn next_id(&self) -> i64;
}
