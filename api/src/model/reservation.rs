use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{FieldId, ReservationId, UserId},
    reservation::Reservation,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub date: NaiveDate,
    #[garde(skip)]
    pub start_time: NaiveTime,
    #[garde(skip)]
    pub end_time: NaiveTime,
    #[garde(skip)]
    #[serde(default)]
    pub include_extra_time: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub field_id: FieldId,
    pub reserved_by: UserId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub total_price: Decimal,
    pub extra_time: bool,
    pub reference_code: String,
    pub reserved_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            field_id,
            reserved_by,
            date,
            start,
            end,
            status,
            total_price,
            extra_time,
            reference_code,
            reserved_at,
        } = value;
        Self {
            id,
            field_id,
            reserved_by,
            date,
            start_time: start,
            end_time: end,
            status: status.as_str().into(),
            total_price,
            extra_time,
            reference_code,
            reserved_at,
        }
    }
}
