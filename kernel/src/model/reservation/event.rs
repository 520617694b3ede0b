use crate::model::id::{FieldId, UserId};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use derive_new::new;
use rust_decimal::Decimal;

// Cloneable so the admission service can replay it after a transient
// serialization conflict.
#[derive(new, Debug, Clone)]
pub struct CreateReservation {
    pub field_id: FieldId,
    pub reserved_by: UserId,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub extra_time: bool,
    pub total_price: Decimal,
    pub reserved_at: DateTime<Utc>,
}
