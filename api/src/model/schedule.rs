use chrono::NaiveTime;
use garde::Validate;
use kernel::model::{
    id::ScheduleWindowId,
    schedule::{weekday_number, ScheduleWindow},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWindowRequest {
    /// ISO weekday number, Monday = 1 through Sunday = 7.
    #[garde(range(min = 1, max = 7))]
    pub weekday: i16,
    #[garde(skip)]
    pub start_time: NaiveTime,
    #[garde(skip)]
    pub end_time: NaiveTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResponse {
    pub id: ScheduleWindowId,
    pub weekday: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<ScheduleWindow> for WindowResponse {
    fn from(value: ScheduleWindow) -> Self {
        let ScheduleWindow {
            id,
            field_id: _,
            weekday,
            start,
            end,
        } = value;
        Self {
            id,
            weekday: weekday_number(weekday),
            start_time: start,
            end_time: end,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowsResponse {
    pub items: Vec<WindowResponse>,
}

impl From<Vec<ScheduleWindow>> for WindowsResponse {
    fn from(value: Vec<ScheduleWindow>) -> Self {
        Self {
            items: value.into_iter().map(WindowResponse::from).collect(),
        }
    }
}
