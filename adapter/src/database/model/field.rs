use chrono::{DateTime, Utc};
use kernel::model::field::Field;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct FieldRow {
    pub field_id: Uuid,
    pub field_name: String,
    pub owner: String,
    pub hourly_rate: Decimal,
    pub extra_time_rate: Option<Decimal>,
    pub allows_extra_time: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<FieldRow> for Field {
    fn from(value: FieldRow) -> Self {
        let FieldRow {
            field_id,
            field_name,
            owner,
            hourly_rate,
            extra_time_rate,
            allows_extra_time,
            is_active,
            created_at,
        } = value;
        Field {
            id: field_id.into(),
            field_name,
            owner,
            hourly_rate,
            extra_time_rate,
            allows_extra_time,
            is_active,
            created_at,
        }
    }
}
