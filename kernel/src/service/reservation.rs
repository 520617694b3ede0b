use crate::interval::duration_minutes;
use crate::model::field::Field;
use crate::model::id::{FieldId, ReservationId, UserId};
use crate::model::reservation::{event::CreateReservation, Reservation, ReservationStatus};
use crate::notifier::ReservationNotifier;
use crate::pricing::calculate_price;
use crate::repository::field::FieldRepository;
use crate::repository::reservation::ReservationRepository;
use crate::repository::schedule::ScheduleRepository;
use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use derive_new::new;
use shared::config::BookingConfig;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Admission controller: validates a booking request, prices it, and
/// delegates the race-sensitive part to the repository's atomic
/// `create_if_free`. Status transitions run through the state machine
/// here as well.
#[derive(new)]
pub struct ReservationService {
    field_repository: Arc<dyn FieldRepository>,
    schedule_repository: Arc<dyn ScheduleRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    notifier: Arc<dyn ReservationNotifier>,
    config: BookingConfig,
}

impl ReservationService {
    pub async fn create_reservation(
        &self,
        field_id: FieldId,
        requester: UserId,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        include_extra_time: bool,
    ) -> AppResult<Reservation> {
        duration_minutes(start, end)?;

        let field = self.find_field(field_id).await?;
        if !field.is_active {
            return Err(AppError::UnprocessableEntity(format!(
                "field {field_id} is not active"
            )));
        }

        let windows = self
            .schedule_repository
            .windows_for(field_id, date.weekday())
            .await?;
        if !windows.iter().any(|w| w.contains(start, end)) {
            return Err(AppError::OutsideSchedule);
        }

        // Price is recomputed here, at booking time; the availability
        // listing a caller saw may carry an older rate.
        let breakdown = calculate_price(
            &field,
            start,
            end,
            include_extra_time,
            self.config.extra_time_minutes,
        )?;
        let extra_time = include_extra_time && field.allows_extra_time;

        let event = CreateReservation::new(
            field_id,
            requester,
            date,
            start,
            end,
            extra_time,
            breakdown.total,
            Utc::now(),
        );

        let reservation = match self
            .reservation_repository
            .create_if_free(event.clone())
            .await
        {
            // One retry with a fresh re-check; a second conflict is
            // reported as the slot being taken.
            Err(AppError::TransientConflict) => self
                .reservation_repository
                .create_if_free(event)
                .await
                .map_err(|e| match e {
                    AppError::TransientConflict => AppError::SlotUnavailable,
                    other => other,
                })?,
            other => other?,
        };

        self.notifier.reservation_created(&reservation);
        Ok(reservation)
    }

    pub async fn cancel(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        self.transition(reservation_id, ReservationStatus::Cancelled)
            .await
    }

    pub async fn confirm(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        self.transition(reservation_id, ReservationStatus::Confirmed)
            .await
    }

    pub async fn complete(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        self.transition(reservation_id, ReservationStatus::Completed)
            .await
    }

    pub async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        self.reservation_repository
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("reservation {reservation_id} not found"))
            })
    }

    // No slot re-validation on transitions: freeing or keeping the slot is
    // inherent in the status itself.
    async fn transition(
        &self,
        reservation_id: ReservationId,
        to: ReservationStatus,
    ) -> AppResult<Reservation> {
        let current = self.find_by_id(reservation_id).await?;
        if current.status.is_terminal() {
            return Err(AppError::AlreadyTerminal(current.status.as_str().into()));
        }
        if !current.status.can_transition_to(to) {
            return Err(AppError::UnprocessableEntity(format!(
                "reservation {} cannot move from {} to {}",
                reservation_id,
                current.status.as_str(),
                to.as_str()
            )));
        }

        let updated = self
            .reservation_repository
            .update_status(reservation_id, current.status, to)
            .await?;
        self.notifier.reservation_status_changed(&updated);
        Ok(updated)
    }

    async fn find_field(&self, field_id: FieldId) -> AppResult<Field> {
        self.field_repository
            .find_by_id(field_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("field {field_id} not found")))
    }
}
