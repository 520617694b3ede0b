use crate::availability::{compute_availability, Availability};
use crate::model::field::Field;
use crate::model::id::FieldId;
use crate::pricing::{calculate_price, PriceBreakdown};
use crate::repository::field::FieldRepository;
use crate::repository::reservation::ReservationRepository;
use crate::repository::schedule::ScheduleRepository;
use chrono::{Datelike, NaiveDate, NaiveTime};
use derive_new::new;
use shared::config::BookingConfig;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Read side of the booking core: free-slot listing and price quotes.
/// Results are advisory; the admission service re-checks authoritatively
/// at booking time.
#[derive(new)]
pub struct AvailabilityService {
    field_repository: Arc<dyn FieldRepository>,
    schedule_repository: Arc<dyn ScheduleRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    config: BookingConfig,
}

impl AvailabilityService {
    pub async fn get_availability(
        &self,
        field_id: FieldId,
        date: NaiveDate,
    ) -> AppResult<Availability> {
        let field = self.find_field(field_id).await?;

        let windows = self
            .schedule_repository
            .windows_for(field_id, date.weekday())
            .await?;
        if windows.is_empty() {
            return Ok(Availability {
                slots: Vec::new(),
                schedule_configured: false,
            });
        }

        let reservations = self
            .reservation_repository
            .find_blocking(field_id, date)
            .await?;

        // Pricing happens at call time; the admission service recomputes
        // at booking time, so a rate change between browsing and booking
        // is settled there.
        let slots = compute_availability(
            &windows,
            &reservations,
            self.config.slot_minutes,
            field.hourly_rate,
        )?;

        Ok(Availability {
            slots,
            schedule_configured: true,
        })
    }

    pub async fn quote(
        &self,
        field_id: FieldId,
        start: NaiveTime,
        end: NaiveTime,
        include_extra_time: bool,
    ) -> AppResult<PriceBreakdown> {
        let field = self.find_field(field_id).await?;
        calculate_price(
            &field,
            start,
            end,
            include_extra_time,
            self.config.extra_time_minutes,
        )
    }

    async fn find_field(&self, field_id: FieldId) -> AppResult<Field> {
        self.field_repository
            .find_by_id(field_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("field {field_id} not found")))
    }
}
