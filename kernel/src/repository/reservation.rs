use crate::model::id::{FieldId, ReservationId};
use crate::model::reservation::{event::CreateReservation, Reservation, ReservationStatus};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Atomic admission: the blocking-overlap re-check and the insert happen
    /// in one transaction/lock scope, so of two concurrent conflicting calls
    /// at most one succeeds. Overlap with a pending or confirmed reservation
    /// fails with `SlotUnavailable`; a serialization conflict surfaces as
    /// `TransientConflict` for the caller to retry once.
    async fn create_if_free(&self, event: CreateReservation) -> AppResult<Reservation>;

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;

    /// Pending and confirmed reservations of a field on one date, sorted by
    /// start time. Advisory: read without locking.
    async fn find_blocking(
        &self,
        field_id: FieldId,
        date: NaiveDate,
    ) -> AppResult<Vec<Reservation>>;

    /// Conditional status update: applies `to` only while the stored status
    /// still equals `from`, so a concurrent transition loses cleanly.
    async fn update_status(
        &self,
        reservation_id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> AppResult<Reservation>;
}
