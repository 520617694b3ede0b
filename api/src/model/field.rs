use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    field::{event::CreateField, Field},
    id::FieldId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldRequest {
    #[garde(length(min = 1))]
    pub field_name: String,
    #[garde(length(min = 1))]
    pub owner: String,
    #[garde(skip)]
    pub hourly_rate: Decimal,
    #[garde(skip)]
    pub extra_time_rate: Option<Decimal>,
    #[garde(skip)]
    pub allows_extra_time: bool,
    #[garde(skip)]
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl From<CreateFieldRequest> for CreateField {
    fn from(value: CreateFieldRequest) -> Self {
        let CreateFieldRequest {
            field_name,
            owner,
            hourly_rate,
            extra_time_rate,
            allows_extra_time,
            is_active,
        } = value;
        CreateField {
            field_name,
            owner,
            hourly_rate,
            extra_time_rate,
            allows_extra_time,
            is_active,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResponse {
    pub id: FieldId,
    pub field_name: String,
    pub owner: String,
    pub hourly_rate: Decimal,
    pub extra_time_rate: Option<Decimal>,
    pub allows_extra_time: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Field> for FieldResponse {
    fn from(value: Field) -> Self {
        let Field {
            id,
            field_name,
            owner,
            hourly_rate,
            extra_time_rate,
            allows_extra_time,
            is_active,
            created_at,
        } = value;
        Self {
            id,
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

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldsResponse {
    pub items: Vec<FieldResponse>,
}

impl From<Vec<Field>> for FieldsResponse {
    fn from(value: Vec<Field>) -> Self {
        Self {
            items: value.into_iter().map(FieldResponse::from).collect(),
        }
    }
}
