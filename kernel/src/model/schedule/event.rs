use crate::model::id::{FieldId, ScheduleWindowId};
use chrono::{NaiveTime, Weekday};
use derive_new::new;

#[derive(new, Debug, Clone)]
pub struct CreateScheduleWindow {
    pub field_id: FieldId,
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(new, Debug)]
pub struct DeleteScheduleWindow {
    pub field_id: FieldId,
    pub window_id: ScheduleWindowId,
}
