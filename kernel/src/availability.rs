//! Slot generation: discretizes a day's schedule windows into bookable
//! slots and removes the ones taken by blocking reservations.

use crate::interval::{minutes_from_midnight, overlaps, time_from_minutes};
use crate::model::reservation::Reservation;
use crate::model::schedule::ScheduleWindow;
use crate::pricing::slot_price;
use chrono::NaiveTime;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

/// One transient bookable unit. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i64,
    pub price: Decimal,
}

#[derive(Debug)]
pub struct Availability {
    pub slots: Vec<Slot>,
    /// False when the field has no schedule windows for the requested
    /// weekday; an empty slot list then carries this indicator instead of
    /// being an error.
    pub schedule_configured: bool,
}

/// Walks each window in granularity steps and keeps the candidate slots
/// that overlap no blocking reservation. Partial trailing periods are
/// dropped, occupied slots are skipped without emitting partial slots, and
/// identical slots produced by overlapping windows are deduplicated. The
/// result is chronological.
pub fn compute_availability(
    windows: &[ScheduleWindow],
    reservations: &[Reservation],
    slot_minutes: u32,
    hourly_rate: Decimal,
) -> AppResult<Vec<Slot>> {
    if slot_minutes == 0 {
        return Err(AppError::InvalidInterval(
            "slot granularity must be positive".into(),
        ));
    }

    let blocking: Vec<(NaiveTime, NaiveTime)> = reservations
        .iter()
        .filter(|r| r.status.blocks_slot())
        .map(|r| (r.start, r.end))
        .collect();

    let granularity = i64::from(slot_minutes);
    let price = slot_price(hourly_rate, slot_minutes);

    let mut slots = Vec::new();
    for window in windows {
        let mut cursor = minutes_from_midnight(window.start);
        let window_end = minutes_from_midnight(window.end);
        while cursor + granularity <= window_end {
            let start = time_from_minutes(cursor);
            let end = time_from_minutes(cursor + granularity);
            let (Some(start), Some(end)) = (start, end) else {
                return Err(AppError::InvalidInterval(
                    "slot boundary fell outside the day".into(),
                ));
            };
            if !blocking.iter().any(|&(s, e)| overlaps(start, end, s, e)) {
                slots.push(Slot {
                    start,
                    end,
                    duration_minutes: granularity,
                    price,
                });
            }
            cursor += granularity;
        }
    }

    slots.sort_by_key(|slot| (slot.start, slot.end));
    slots.dedup_by_key(|slot| (slot.start, slot.end));
    Ok(slots)
}
