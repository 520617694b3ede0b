use crate::model::availability::{
    AvailabilityQuery, AvailabilityResponse, PriceBreakdownResponse, QuoteRequest,
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use kernel::model::id::FieldId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn get_availability(
    Path(field_id): Path<FieldId>,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    registry
        .availability_service()
        .get_availability(field_id, query.date)
        .await
        .map(AvailabilityResponse::from)
        .map(Json)
}

pub async fn quote(
    Path(field_id): Path<FieldId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<QuoteRequest>,
) -> AppResult<Json<PriceBreakdownResponse>> {
    registry
        .availability_service()
        .quote(field_id, req.start_time, req.end_time, req.include_extra_time)
        .await
        .map(PriceBreakdownResponse::from)
        .map(Json)
}
