use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use kernel::model::reservation::{Reservation, ReservationStatus};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct ReservationRow {
    pub reservation_id: Uuid,
    pub field_id: Uuid,
    pub user_id: Uuid,
    pub reserved_on: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub total_price: Decimal,
    pub extra_time: bool,
    pub reference_code: String,
    pub reserved_at: DateTime<Utc>,
}

impl ReservationRow {
    pub fn into_reservation(self) -> AppResult<Reservation> {
        let ReservationRow {
            reservation_id,
            field_id,
            user_id,
            reserved_on,
            start_time,
            end_time,
            status,
            total_price,
            extra_time,
            reference_code,
            reserved_at,
        } = self;
        let status = ReservationStatus::from_str(&status).ok_or_else(|| {
            AppError::ConversionEntityError(format!("invalid stored reservation status: {status}"))
        })?;
        Ok(Reservation {
            id: reservation_id.into(),
            field_id: field_id.into(),
            reserved_by: user_id.into(),
            date: reserved_on,
            start: start_time,
            end: end_time,
            status,
            total_price,
            extra_time,
            reference_code,
            reserved_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row(status: &str) -> ReservationRow {
        ReservationRow {
            reservation_id: Uuid::new_v4(),
            field_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            reserved_on: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            status: status.into(),
            total_price: Decimal::new(10000, 2),
            extra_time: false,
            reference_code: "BK-0A1B2C3D".into(),
            reserved_at: Utc::now(),
        }
    }

    #[test]
    fn known_statuses_convert() {
        for status in ["pending", "confirmed", "cancelled", "completed"] {
            assert!(row(status).into_reservation().is_ok());
        }
    }

    #[test]
    fn unknown_status_is_a_conversion_error() {
        assert!(matches!(
            row("returned").into_reservation(),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
