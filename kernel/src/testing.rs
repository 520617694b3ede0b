//! In-memory repository and notifier implementations used by service
//! tests. They honor the same contracts as the database-backed adapters,
//! in particular the atomicity of `create_if_free`, so concurrency
//! scenarios run hermetically.

use crate::interval::overlaps;
use crate::model::field::{event::CreateField, Field};
use crate::model::id::{FieldId, ReservationId, UserId};
use crate::model::reservation::{
    event::CreateReservation, reference_code, Reservation, ReservationStatus,
};
use crate::model::schedule::{
    event::{CreateScheduleWindow, DeleteScheduleWindow},
    ScheduleWindow,
};
use crate::model::schedule::weekday_number;
use crate::notifier::ReservationNotifier;
use crate::repository::field::FieldRepository;
use crate::repository::reservation::ReservationRepository;
use crate::repository::schedule::ScheduleRepository;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc, Weekday};
use shared::error::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryFieldRepository {
    fields: Mutex<Vec<Field>>,
}

impl InMemoryFieldRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a field as-is, keeping the caller's id.
    pub async fn insert(&self, field: Field) {
        self.fields.lock().await.push(field);
    }
}

#[async_trait]
impl FieldRepository for InMemoryFieldRepository {
    async fn create(&self, event: CreateField) -> AppResult<FieldId> {
        let field = Field {
            id: FieldId::new(),
            field_name: event.field_name,
            owner: event.owner,
            hourly_rate: event.hourly_rate,
            extra_time_rate: event.extra_time_rate,
            allows_extra_time: event.allows_extra_time,
            is_active: event.is_active,
            created_at: Utc::now(),
        };
        let id = field.id;
        self.fields.lock().await.push(field);
        Ok(id)
    }

    async fn find_all(&self) -> AppResult<Vec<Field>> {
        Ok(self.fields.lock().await.clone())
    }

    async fn find_by_id(&self, field_id: FieldId) -> AppResult<Option<Field>> {
        Ok(self
            .fields
            .lock()
            .await
            .iter()
            .find(|f| f.id == field_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryScheduleRepository {
    windows: Mutex<Vec<ScheduleWindow>>,
}

impl InMemoryScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn add_window(&self, event: CreateScheduleWindow) -> AppResult<ScheduleWindow> {
        let mut windows = self.windows.lock().await;
        let duplicate = windows.iter().any(|w| {
            w.field_id == event.field_id
                && w.weekday == event.weekday
                && w.start == event.start
                && w.end == event.end
        });
        if duplicate {
            return Err(AppError::DuplicateWindow);
        }
        let window = ScheduleWindow {
            id: crate::model::id::ScheduleWindowId::new(),
            field_id: event.field_id,
            weekday: event.weekday,
            start: event.start,
            end: event.end,
        };
        windows.push(window.clone());
        Ok(window)
    }

    async fn windows_for(
        &self,
        field_id: FieldId,
        weekday: Weekday,
    ) -> AppResult<Vec<ScheduleWindow>> {
        let mut found: Vec<ScheduleWindow> = self
            .windows
            .lock()
            .await
            .iter()
            .filter(|w| w.field_id == field_id && w.weekday == weekday)
            .cloned()
            .collect();
        found.sort_by_key(|w| w.start);
        Ok(found)
    }

    async fn windows_for_field(&self, field_id: FieldId) -> AppResult<Vec<ScheduleWindow>> {
        let mut found: Vec<ScheduleWindow> = self
            .windows
            .lock()
            .await
            .iter()
            .filter(|w| w.field_id == field_id)
            .cloned()
            .collect();
        found.sort_by_key(|w| (weekday_number(w.weekday), w.start));
        Ok(found)
    }

    async fn remove_window(&self, event: DeleteScheduleWindow) -> AppResult<()> {
        let mut windows = self.windows.lock().await;
        let before = windows.len();
        windows.retain(|w| !(w.field_id == event.field_id && w.id == event.window_id));
        if windows.len() == before {
            return Err(AppError::EntityNotFound(format!(
                "schedule window {} not found",
                event.window_id
            )));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryReservationRepository {
    reservations: Mutex<Vec<Reservation>>,
    transient_failures: AtomicUsize,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `count` calls to `create_if_free` fail with a transient
    /// conflict before touching state, mimicking a serialization failure.
    pub fn fail_next_with_transient(&self, count: usize) {
        self.transient_failures.store(count, Ordering::SeqCst);
    }

    pub async fn insert(&self, reservation: Reservation) {
        self.reservations.lock().await.push(reservation);
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create_if_free(&self, event: CreateReservation) -> AppResult<Reservation> {
        if self
            .transient_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(AppError::TransientConflict);
        }

        // The lock spans the re-check and the insert, which is exactly the
        // atomicity the trait demands.
        let mut reservations = self.reservations.lock().await;
        let conflict = reservations.iter().any(|r| {
            r.field_id == event.field_id
                && r.date == event.date
                && r.status.blocks_slot()
                && overlaps(event.start, event.end, r.start, r.end)
        });
        if conflict {
            return Err(AppError::SlotUnavailable);
        }

        let id = ReservationId::new();
        let reservation = Reservation {
            id,
            field_id: event.field_id,
            reserved_by: event.reserved_by,
            date: event.date,
            start: event.start,
            end: event.end,
            status: ReservationStatus::Pending,
            total_price: event.total_price,
            extra_time: event.extra_time,
            reference_code: reference_code(id),
            reserved_at: event.reserved_at,
        };
        reservations.push(reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .await
            .iter()
            .find(|r| r.id == reservation_id)
            .cloned())
    }

    async fn find_blocking(
        &self,
        field_id: FieldId,
        date: NaiveDate,
    ) -> AppResult<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .reservations
            .lock()
            .await
            .iter()
            .filter(|r| r.field_id == field_id && r.date == date && r.status.blocks_slot())
            .cloned()
            .collect();
        found.sort_by_key(|r| r.start);
        Ok(found)
    }

    async fn update_status(
        &self,
        reservation_id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> AppResult<Reservation> {
        let mut reservations = self.reservations.lock().await;
        let Some(reservation) = reservations.iter_mut().find(|r| r.id == reservation_id) else {
            return Err(AppError::EntityNotFound(format!(
                "reservation {reservation_id} not found"
            )));
        };
        if reservation.status != from {
            // The stored status moved under us; only report terminal when
            // it actually is.
            return Err(if reservation.status.is_terminal() {
                AppError::AlreadyTerminal(reservation.status.as_str().into())
            } else {
                AppError::UnprocessableEntity(format!(
                    "reservation {} is {}, not {}",
                    reservation_id,
                    reservation.status.as_str(),
                    from.as_str()
                ))
            });
        }
        reservation.status = to;
        Ok(reservation.clone())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub created: std::sync::Mutex<Vec<ReservationId>>,
    pub status_changes: std::sync::Mutex<Vec<(ReservationId, ReservationStatus)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationNotifier for RecordingNotifier {
    fn reservation_created(&self, reservation: &Reservation) {
        self.created
            .lock()
            .expect("notifier lock poisoned")
            .push(reservation.id);
    }

    fn reservation_status_changed(&self, reservation: &Reservation) {
        self.status_changes
            .lock()
            .expect("notifier lock poisoned")
            .push((reservation.id, reservation.status));
    }
}

/// A field with sane defaults for tests.
pub fn test_field(hourly_rate: rust_decimal::Decimal) -> Field {
    Field {
        id: FieldId::new(),
        field_name: "Court 1".into(),
        owner: "Test Sports Club".into(),
        hourly_rate,
        extra_time_rate: None,
        allows_extra_time: false,
        is_active: true,
        created_at: Utc::now(),
    }
}

pub fn test_user() -> UserId {
    UserId::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // 2026-09-07 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
    }

    #[tokio::test]
    async fn identical_window_triple_is_rejected_as_duplicate() {
        let schedules = InMemoryScheduleRepository::new();
        let field_id = FieldId::new();
        let event = CreateScheduleWindow::new(field_id, Weekday::Mon, t(8, 0), t(10, 0));
        schedules.add_window(event.clone()).await.unwrap();

        let err = schedules.add_window(event).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateWindow));

        // Overlapping but non-identical windows are accepted.
        schedules
            .add_window(CreateScheduleWindow::new(field_id, Weekday::Mon, t(9, 0), t(11, 0)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn lost_transition_race_reports_the_actual_state() {
        let reservations = InMemoryReservationRepository::new();
        let created = reservations
            .create_if_free(CreateReservation::new(
                FieldId::new(),
                test_user(),
                monday(),
                t(8, 0),
                t(9, 0),
                false,
                dec!(100),
                Utc::now(),
            ))
            .await
            .unwrap();

        // A confirm raced ahead of us: the stored status is confirmed,
        // which is live, not terminal.
        reservations
            .update_status(
                created.id,
                ReservationStatus::Pending,
                ReservationStatus::Confirmed,
            )
            .await
            .unwrap();
        let err = reservations
            .update_status(
                created.id,
                ReservationStatus::Pending,
                ReservationStatus::Confirmed,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));

        // Once the reservation really is terminal, the conflict reports it.
        reservations
            .update_status(
                created.id,
                ReservationStatus::Confirmed,
                ReservationStatus::Cancelled,
            )
            .await
            .unwrap();
        let err = reservations
            .update_status(
                created.id,
                ReservationStatus::Confirmed,
                ReservationStatus::Completed,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AlreadyTerminal(_)));
    }
}
