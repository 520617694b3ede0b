use crate::{
    extractor::Requester,
    model::reservation::{CreateReservationRequest, ReservationResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::{FieldId, ReservationId};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn create_reservation(
    requester: Requester,
    Path(field_id): Path<FieldId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate(&())?;

    let reservation = registry
        .reservation_service()
        .create_reservation(
            field_id,
            requester.id(),
            req.date,
            req.start_time,
            req.end_time,
            req.include_extra_time,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}

pub async fn show_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_service()
        .find_by_id(reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn cancel_reservation(
    _requester: Requester,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_service()
        .cancel(reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn confirm_reservation(
    _requester: Requester,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_service()
        .confirm(reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn complete_reservation(
    _requester: Requester,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    registry
        .reservation_service()
        .complete(reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}
