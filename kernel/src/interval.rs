//! Half-open time-interval arithmetic. `overlaps` is the single conflict
//! test used by slot generation, the admission check, and the storage-side
//! re-check; the half-open semantics (touching endpoints do not overlap)
//! must match everywhere.

use chrono::NaiveTime;
use shared::error::{AppError, AppResult};

/// True iff [a_start, a_end) and [b_start, b_end) share any instant.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Length of [start, end) in whole minutes. `end <= start` is a malformed
/// interval, never a wrap around midnight.
pub fn duration_minutes(start: NaiveTime, end: NaiveTime) -> AppResult<i64> {
    if end <= start {
        return Err(AppError::InvalidInterval(format!(
            "end ({end}) must be after start ({start})"
        )));
    }
    Ok((end - start).num_minutes())
}

/// Rounds a minute count down to the nearest multiple of the granularity.
pub fn round_down_to_granularity(minutes: i64, granularity_minutes: u32) -> AppResult<i64> {
    if granularity_minutes == 0 {
        return Err(AppError::InvalidInterval(
            "granularity must be positive".into(),
        ));
    }
    let granularity = i64::from(granularity_minutes);
    Ok(minutes - minutes % granularity)
}

pub(crate) fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(chrono::Timelike::num_seconds_from_midnight(&time)) / 60
}

pub(crate) fn time_from_minutes(minutes: i64) -> Option<NaiveTime> {
    let seconds = u32::try_from(minutes.checked_mul(60)?).ok()?;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
}
