use crate::model::id::FieldId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

pub mod event;

#[derive(Debug, Clone)]
pub struct Field {
    pub id: FieldId,
    pub field_name: String,
    pub owner: String,
    pub hourly_rate: Decimal,
    pub extra_time_rate: Option<Decimal>,
    pub allows_extra_time: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
