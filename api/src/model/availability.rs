use chrono::{NaiveDate, NaiveTime};
use kernel::availability::{Availability, Slot};
use kernel::pricing::PriceBreakdown;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i64,
    pub price: Decimal,
}

impl From<Slot> for SlotResponse {
    fn from(value: Slot) -> Self {
        let Slot {
            start,
            end,
            duration_minutes,
            price,
        } = value;
        Self {
            start_time: start,
            end_time: end,
            duration_minutes,
            price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub slots: Vec<SlotResponse>,
    pub schedule_configured: bool,
}

impl From<Availability> for AvailabilityResponse {
    fn from(value: Availability) -> Self {
        let Availability {
            slots,
            schedule_configured,
        } = value;
        Self {
            slots: slots.into_iter().map(SlotResponse::from).collect(),
            schedule_configured,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub include_extra_time: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownResponse {
    pub base_price: Decimal,
    pub extra_time_fee: Decimal,
    pub total: Decimal,
    pub duration_minutes: i64,
}

impl From<PriceBreakdown> for PriceBreakdownResponse {
    fn from(value: PriceBreakdown) -> Self {
        let PriceBreakdown {
            base_price,
            extra_time_fee,
            total,
            duration_minutes,
        } = value;
        Self {
            base_price,
            extra_time_fee,
            total,
            duration_minutes,
        }
    }
}
