//! Equipment API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{AssignRecipient, EquipmentId, EquipmentRecord, NewEquipment, UpdateStatus},
    },
    AppState,
};

use super::Caller;

#[derive(Serialize, ToSchema)]
pub struct RegisteredResponse {
    pub id: EquipmentId,
}

#[derive(Serialize, ToSchema)]
pub struct LastIdResponse {
    pub last_id: EquipmentId,
}

/// Register donated equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("caller_id" = [])),
    request_body = NewEquipment,
    responses(
        (status = 201, description = "Equipment registered", body = RegisteredResponse),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse),
        (status = 401, description = "Caller identity missing", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_equipment(
    State(state): State<AppState>,
    Caller(caller): Caller,
    WithRejection(Json(data), _): WithRejection<Json<NewEquipment>, AppError>,
) -> AppResult<(StatusCode, Json<RegisteredResponse>)> {
    let id = state.services.equipment.register(data, &caller).await?;
    Ok((StatusCode::CREATED, Json(RegisteredResponse { id })))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = u64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentRecord),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<EquipmentId>, AppError>,
) -> AppResult<Json<EquipmentRecord>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Set the status of equipment (donor only)
#[utoipa::path(
    put,
    path = "/equipment/{id}/status",
    tag = "equipment",
    security(("caller_id" = [])),
    params(("id" = u64, Path, description = "Equipment ID")),
    request_body = UpdateStatus,
    responses(
        (status = 204, description = "Status updated"),
        (status = 403, description = "Caller is not the donor", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment_status(
    State(state): State<AppState>,
    Caller(caller): Caller,
    WithRejection(Path(id), _): WithRejection<Path<EquipmentId>, AppError>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateStatus>, AppError>,
) -> AppResult<StatusCode> {
    state
        .services
        .equipment
        .update_status(id, EquipmentStatus::from(data.status), &caller)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Assign a recipient to verified equipment (donor only)
#[utoipa::path(
    post,
    path = "/equipment/{id}/recipient",
    tag = "equipment",
    security(("caller_id" = [])),
    params(("id" = u64, Path, description = "Equipment ID")),
    request_body = AssignRecipient,
    responses(
        (status = 204, description = "Recipient assigned"),
        (status = 400, description = "Equipment is not verified", body = crate::error::ErrorResponse),
        (status = 403, description = "Caller is not the donor", body = crate::error::ErrorResponse),
        (status = 404, description = "Unknown equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn assign_recipient(
    State(state): State<AppState>,
    Caller(caller): Caller,
    WithRejection(Path(id), _): WithRejection<Path<EquipmentId>, AppError>,
    WithRejection(Json(data), _): WithRejection<Json<AssignRecipient>, AppError>,
) -> AppResult<StatusCode> {
    state
        .services
        .equipment
        .assign_recipient(id, data.recipient_id, &caller)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Last allocated equipment id
#[utoipa::path(
    get,
    path = "/registry/last-id",
    tag = "equipment",
    responses(
        (status = 200, description = "Last allocated id, 0 when empty", body = LastIdResponse)
    )
)]
pub async fn get_last_id(State(state): State<AppState>) -> Json<LastIdResponse> {
    Json(LastIdResponse {
        last_id: state.services.equipment.last_id().await,
    })
}
