use crate::database::{model::field::FieldRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::field::{event::CreateField, Field};
use kernel::model::id::FieldId;
use kernel::repository::field::FieldRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct FieldRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FieldRepository for FieldRepositoryImpl {
    async fn create(&self, event: CreateField) -> AppResult<FieldId> {
        let field_id = FieldId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO fields
                (field_id, field_name, owner, hourly_rate,
                 extra_time_rate, allows_extra_time, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(field_id.raw())
        .bind(&event.field_name)
        .bind(&event.owner)
        .bind(event.hourly_rate)
        .bind(event.extra_time_rate)
        .bind(event.allows_extra_time)
        .bind(event.is_active)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No field record has been created".into(),
            ));
        }

        Ok(field_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Field>> {
        let rows: Vec<FieldRow> = sqlx::query_as(
            r#"
                SELECT
                    field_id,
                    field_name,
                    owner,
                    hourly_rate,
                    extra_time_rate,
                    allows_extra_time,
                    is_active,
                    created_at
                FROM fields
                ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Field::from).collect())
    }

    async fn find_by_id(&self, field_id: FieldId) -> AppResult<Option<Field>> {
        let row: Option<FieldRow> = sqlx::query_as(
            r#"
                SELECT
                    field_id,
                    field_name,
                    owner,
                    hourly_rate,
                    extra_time_rate,
                    allows_extra_time,
                    is_active,
                    created_at
                FROM fields
                WHERE field_id = $1
            "#,
        )
        .bind(field_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Field::from))
    }
}
