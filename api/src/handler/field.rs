use crate::{
    extractor::Requester,
    model::field::{CreateFieldRequest, FieldResponse, FieldsResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::FieldId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_field(
    _requester: Requester,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFieldRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate(&())?;

    let field_id = registry.field_repository().create(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "fieldId": field_id })),
    ))
}

pub async fn show_field_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FieldsResponse>> {
    registry
        .field_repository()
        .find_all()
        .await
        .map(FieldsResponse::from)
        .map(Json)
}

pub async fn show_field(
    Path(field_id): Path<FieldId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FieldResponse>> {
    registry
        .field_repository()
        .find_by_id(field_id)
        .await
        .and_then(|field| match field {
            Some(field) => Ok(Json(field.into())),
            None => Err(AppError::EntityNotFound(format!(
                "field {field_id} not found"
            ))),
        })
}
