use crate::interval::duration_minutes;
use crate::model::id::{FieldId, ScheduleWindowId};
use chrono::{NaiveTime, Weekday};
use shared::config::BookingConfig;
use shared::error::AppResult;

pub mod event;

/// One recurring weekly open-hours window for a field. `start`/`end` are
/// time-of-day only; a window never crosses midnight.
#[derive(Debug, Clone)]
pub struct ScheduleWindow {
    pub id: ScheduleWindowId,
    pub field_id: FieldId,
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ScheduleWindow {
    /// Whether the window fully contains the half-open interval [start, end).
    pub fn contains(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start <= start && end <= self.end
    }
}

/// Validates a window against the configured alignment and minimum length.
/// `end <= start` already fails in `duration_minutes`, which also rules out
/// midnight-crossing windows since both bounds are times of one day.
pub fn validate_window(start: NaiveTime, end: NaiveTime, config: &BookingConfig) -> AppResult<()> {
    let minutes = duration_minutes(start, end)?;
    if minutes < i64::from(config.min_window_minutes) {
        return Err(shared::error::AppError::UnprocessableEntity(format!(
            "schedule window must be at least {} minutes long",
            config.min_window_minutes
        )));
    }
    if minutes % i64::from(config.window_align_minutes) != 0 {
        return Err(shared::error::AppError::UnprocessableEntity(format!(
            "schedule window length must be a multiple of {} minutes",
            config.window_align_minutes
        )));
    }
    Ok(())
}

/// ISO weekday number, Monday = 1 through Sunday = 7.
pub fn weekday_number(weekday: Weekday) -> i16 {
    weekday.number_from_monday() as i16
}

pub fn weekday_from_number(number: i16) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}
