use crate::database::{model::schedule::ScheduleWindowRow, ConnectionPool};
use async_trait::async_trait;
use chrono::Weekday;
use derive_new::new;
use kernel::model::id::{FieldId, ScheduleWindowId};
use kernel::model::schedule::{
    event::{CreateScheduleWindow, DeleteScheduleWindow},
    weekday_number, ScheduleWindow,
};
use kernel::repository::schedule::ScheduleRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ScheduleRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    async fn add_window(&self, event: CreateScheduleWindow) -> AppResult<ScheduleWindow> {
        let window_id = ScheduleWindowId::new();
        let weekday = weekday_number(event.weekday);

        // The unique index on (field_id, weekday, start_time, end_time)
        // backstops this insert; a concurrent identical insert surfaces as
        // a unique violation and is reported the same way.
        let res = sqlx::query(
            r#"
                INSERT INTO schedule_windows
                (window_id, field_id, weekday, start_time, end_time)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(window_id.raw())
        .bind(event.field_id.raw())
        .bind(weekday)
        .bind(event.start)
        .bind(event.end)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            let duplicate = e
                .as_database_error()
                .and_then(|d| d.code())
                .is_some_and(|code| code == "23505");
            if duplicate {
                AppError::DuplicateWindow
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No schedule window record has been created".into(),
            ));
        }

        Ok(ScheduleWindow {
            id: window_id,
            field_id: event.field_id,
            weekday: event.weekday,
            start: event.start,
            end: event.end,
        })
    }

    async fn windows_for(
        &self,
        field_id: FieldId,
        weekday: Weekday,
    ) -> AppResult<Vec<ScheduleWindow>> {
        let rows: Vec<ScheduleWindowRow> = sqlx::query_as(
            r#"
                SELECT window_id, field_id, weekday, start_time, end_time
                FROM schedule_windows
                WHERE field_id = $1 AND weekday = $2
                ORDER BY start_time ASC
            "#,
        )
        .bind(field_id.raw())
        .bind(weekday_number(weekday))
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(|row| row.into_window()).collect()
    }

    async fn windows_for_field(&self, field_id: FieldId) -> AppResult<Vec<ScheduleWindow>> {
        let rows: Vec<ScheduleWindowRow> = sqlx::query_as(
            r#"
                SELECT window_id, field_id, weekday, start_time, end_time
                FROM schedule_windows
                WHERE field_id = $1
                ORDER BY weekday ASC, start_time ASC
            "#,
        )
        .bind(field_id.raw())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(|row| row.into_window()).collect()
    }

    async fn remove_window(&self, event: DeleteScheduleWindow) -> AppResult<()> {
        // Reservations made inside the window stay untouched.
        let res = sqlx::query(
            r#"
                DELETE FROM schedule_windows
                WHERE window_id = $1 AND field_id = $2
            "#,
        )
        .bind(event.window_id.raw())
        .bind(event.field_id.raw())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "schedule window {} not found",
                event.window_id
            )));
        }

        Ok(())
    }
}
