use crate::model::id::FieldId;
use crate::model::schedule::{
    event::{CreateScheduleWindow, DeleteScheduleWindow},
    ScheduleWindow,
};
use async_trait::async_trait;
use chrono::Weekday;
use shared::error::AppResult;

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Fails with `DuplicateWindow` when an identical (weekday, start, end)
    /// triple already exists for the field. Overlapping but non-identical
    /// windows are accepted.
    async fn add_window(&self, event: CreateScheduleWindow) -> AppResult<ScheduleWindow>;
    /// Windows for one weekday, sorted by start time ascending.
    async fn windows_for(&self, field_id: FieldId, weekday: Weekday)
        -> AppResult<Vec<ScheduleWindow>>;
    /// All windows of a field, sorted by (weekday, start).
    async fn windows_for_field(&self, field_id: FieldId) -> AppResult<Vec<ScheduleWindow>>;
    /// Deleting a window never touches reservations already made inside it.
    async fn remove_window(&self, event: DeleteScheduleWindow) -> AppResult<()>;
}
