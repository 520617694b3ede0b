use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
    #[error("requested interval is not covered by any schedule window")]
    OutsideSchedule,
    #[error("requested slot conflicts with an existing reservation")]
    SlotUnavailable,
    #[error("an identical schedule window already exists")]
    DuplicateWindow,
    #[error("reservation is already in a terminal state: {0}")]
    AlreadyTerminal(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    UnauthenticatedError(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    // Serialization conflict on the admission transaction. Consumed by the
    // retry in the admission service, never returned to a caller as-is.
    #[error("transient conflict on concurrent write")]
    TransientConflict,
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::InvalidInterval(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError(_) => StatusCode::UNAUTHORIZED,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlotUnavailable
            | AppError::DuplicateWindow
            | AppError::AlreadyTerminal(_)
            | AppError::TransientConflict => StatusCode::CONFLICT,
            AppError::OutsideSchedule | AppError::UnprocessableEntity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::ConversionEntityError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::TransactionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "unexpected error happened"
            );
        }

        let body = axum::Json(serde_json::json!({ "error": self.to_string() }));
        (status_code, body).into_response()
    }
}
