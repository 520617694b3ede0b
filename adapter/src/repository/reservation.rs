use crate::database::{
    map_reservation_db_error, model::reservation::ReservationRow, ConnectionPool,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::id::{FieldId, ReservationId};
use kernel::model::reservation::{
    event::CreateReservation, reference_code, Reservation, ReservationStatus,
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

const RESERVATION_COLUMNS: &str = r#"
    reservation_id,
    field_id,
    user_id,
    reserved_on,
    start_time,
    end_time,
    status,
    total_price,
    extra_time,
    reference_code,
    reserved_at
"#;

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create_if_free(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        // The overlap re-check and the insert must sit in one serializable
        // scope; two concurrent conflicting requests then cannot both
        // commit, one aborts with a serialization failure instead.
        self.set_transaction_serializable(&mut tx).await?;

        {
            //
            // ① field exists and is active
            //
            let field: Option<(bool,)> =
                sqlx::query_as("SELECT is_active FROM fields WHERE field_id = $1")
                    .bind(event.field_id.raw())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(map_reservation_db_error)?;

            let Some((is_active,)) = field else {
                return Err(AppError::EntityNotFound(format!(
                    "field {} not found",
                    event.field_id
                )));
            };
            if !is_active {
                return Err(AppError::UnprocessableEntity(format!(
                    "field {} is not active",
                    event.field_id
                )));
            }

            //
            // ② no blocking reservation overlaps the requested interval
            //    (half-open: existing.start < new.end AND new.start < existing.end)
            //
            let overlap: Option<(uuid::Uuid,)> = sqlx::query_as(
                r#"
                    SELECT reservation_id
                    FROM reservations
                    WHERE field_id = $1
                      AND reserved_on = $2
                      AND status IN ('pending', 'confirmed')
                      AND start_time < $4
                      AND $3 < end_time
                    LIMIT 1
                "#,
            )
            .bind(event.field_id.raw())
            .bind(event.date)
            .bind(event.start)
            .bind(event.end)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_reservation_db_error)?;

            if overlap.is_some() {
                return Err(AppError::SlotUnavailable);
            }
        }

        let reservation_id = ReservationId::new();
        let reference = reference_code(reservation_id);
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, field_id, user_id, reserved_on,
                 start_time, end_time, status, total_price,
                 extra_time, reference_code, reserved_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(reservation_id.raw())
        .bind(event.field_id.raw())
        .bind(event.reserved_by.raw())
        .bind(event.date)
        .bind(event.start)
        .bind(event.end)
        .bind(ReservationStatus::Pending.as_str())
        .bind(event.total_price)
        .bind(event.extra_time)
        .bind(&reference)
        .bind(event.reserved_at)
        .execute(&mut *tx)
        .await
        .map_err(map_reservation_db_error)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(|e| match e {
            sqlx::Error::Database(_) => map_reservation_db_error(e),
            other => AppError::TransactionError(other),
        })?;

        Ok(Reservation {
            id: reservation_id,
            field_id: event.field_id,
            reserved_by: event.reserved_by,
            date: event.date,
            start: event.start,
            end: event.end,
            status: ReservationStatus::Pending,
            total_price: event.total_price,
            extra_time: event.extra_time,
            reference_code: reference,
            reserved_at: event.reserved_at,
        })
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE reservation_id = $1"
        ))
        .bind(reservation_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(|r| r.into_reservation()).transpose()
    }

    async fn find_blocking(
        &self,
        field_id: FieldId,
        date: NaiveDate,
    ) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(&format!(
            r#"
                SELECT {RESERVATION_COLUMNS}
                FROM reservations
                WHERE field_id = $1
                  AND reserved_on = $2
                  AND status IN ('pending', 'confirmed')
                ORDER BY start_time ASC
            "#
        ))
        .bind(field_id.raw())
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(|row| row.into_reservation()).collect()
    }

    async fn update_status(
        &self,
        reservation_id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> AppResult<Reservation> {
        // Conditional on the expected current status, so a transition that
        // lost a race fails instead of clobbering the winner's write.
        let row: Option<ReservationRow> = sqlx::query_as(&format!(
            r#"
                UPDATE reservations
                SET status = $1
                WHERE reservation_id = $2 AND status = $3
                RETURNING {RESERVATION_COLUMNS}
            "#
        ))
        .bind(to.as_str())
        .bind(reservation_id.raw())
        .bind(from.as_str())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => row.into_reservation(),
            None => {
                // The conditional update missed; re-read to tell a terminal
                // reservation apart from one that raced to another live
                // status.
                let current = self
                    .find_by_id(reservation_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::EntityNotFound(format!(
                            "reservation {reservation_id} not found"
                        ))
                    })?;
                if current.status.is_terminal() {
                    Err(AppError::AlreadyTerminal(current.status.as_str().into()))
                } else {
                    Err(AppError::UnprocessableEntity(format!(
                        "reservation {} is {}, not {}",
                        reservation_id,
                        current.status.as_str(),
                        from.as_str()
                    )))
                }
            }
        }
    }
}

impl ReservationRepositoryImpl {
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}
