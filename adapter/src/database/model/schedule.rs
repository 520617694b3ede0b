use chrono::NaiveTime;
use kernel::model::schedule::{weekday_from_number, ScheduleWindow};
use shared::error::{AppError, AppResult};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(FromRow)]
pub struct ScheduleWindowRow {
    pub window_id: Uuid,
    pub field_id: Uuid,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl ScheduleWindowRow {
    // Not a From impl: the stored weekday number can be out of range.
    pub fn into_window(self) -> AppResult<ScheduleWindow> {
        let ScheduleWindowRow {
            window_id,
            field_id,
            weekday,
            start_time,
            end_time,
        } = self;
        let weekday = weekday_from_number(weekday).ok_or_else(|| {
            AppError::ConversionEntityError(format!("invalid stored weekday: {weekday}"))
        })?;
        Ok(ScheduleWindow {
            id: window_id.into(),
            field_id: field_id.into(),
            weekday,
            start: start_time,
            end: end_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn row_converts_to_window() {
        let row = ScheduleWindowRow {
            window_id: Uuid::new_v4(),
            field_id: Uuid::new_v4(),
            weekday: 1,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        };
        let window = row.into_window().unwrap();
        assert_eq!(window.weekday, Weekday::Mon);
    }

    #[test]
    fn out_of_range_weekday_is_a_conversion_error() {
        let row = ScheduleWindowRow {
            window_id: Uuid::new_v4(),
            field_id: Uuid::new_v4(),
            weekday: 9,
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        };
        assert!(matches!(
            row.into_window(),
            Err(AppError::ConversionEntityError(_))
        ));
    }
}
