use crate::{
    extractor::Requester,
    model::schedule::{CreateWindowRequest, WindowResponse, WindowsResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{FieldId, ScheduleWindowId};
use kernel::model::schedule::{
    event::{CreateScheduleWindow, DeleteScheduleWindow},
    validate_window, weekday_from_number,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn add_window(
    _requester: Requester,
    Path(field_id): Path<FieldId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateWindowRequest>,
) -> AppResult<(StatusCode, Json<WindowResponse>)> {
    req.validate(&())?;

    let weekday = weekday_from_number(req.weekday).ok_or_else(|| {
        AppError::UnprocessableEntity(format!("invalid weekday: {}", req.weekday))
    })?;
    validate_window(req.start_time, req.end_time, registry.booking_config())?;

    registry
        .field_repository()
        .find_by_id(field_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("field {field_id} not found")))?;

    let window = registry
        .schedule_repository()
        .add_window(CreateScheduleWindow::new(
            field_id,
            weekday,
            req.start_time,
            req.end_time,
        ))
        .await?;

    Ok((StatusCode::CREATED, Json(window.into())))
}

pub async fn window_list(
    Path(field_id): Path<FieldId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<WindowsResponse>> {
    registry
        .schedule_repository()
        .windows_for_field(field_id)
        .await
        .map(WindowsResponse::from)
        .map(Json)
}

pub async fn remove_window(
    _requester: Requester,
    Path((field_id, window_id)): Path<(FieldId, ScheduleWindowId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .schedule_repository()
        .remove_window(DeleteScheduleWindow::new(field_id, window_id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
