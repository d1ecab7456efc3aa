//! Maintenance schedule endpoints for the admin dashboard

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::maintenance::{
        CreateMaintenanceSchedule, MaintenanceSchedule, UpdateMaintenanceSchedule,
    },
};

use super::AdminDeleteParams;

/// List maintenance schedules
#[utoipa::path(
    get,
    path = "/maintenance-schedules",
    tag = "maintenance",
    responses(
        (status = 200, description = "Schedule list", body = Vec<MaintenanceSchedule>)
    )
)]
pub async fn list_schedules(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceSchedule>>> {
    let schedules = state.services.maintenance.list().await?;
    Ok(Json(schedules))
}

/// Create a maintenance schedule
#[utoipa::path(
    post,
    path = "/maintenance-schedules",
    tag = "maintenance",
    request_body = CreateMaintenanceSchedule,
    responses(
        (status = 201, description = "Schedule created", body = MaintenanceSchedule),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_schedule(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenanceSchedule>,
) -> AppResult<(StatusCode, Json<MaintenanceSchedule>)> {
    let schedule = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Partial update of a maintenance schedule
#[utoipa::path(
    patch,
    path = "/maintenance-schedules/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Schedule ID")),
    request_body = UpdateMaintenanceSchedule,
    responses(
        (status = 200, description = "Schedule updated", body = MaintenanceSchedule),
        (status = 404, description = "Schedule not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_schedule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMaintenanceSchedule>,
) -> AppResult<Json<MaintenanceSchedule>> {
    let schedule = state.services.maintenance.update(id, &data).await?;
    Ok(Json(schedule))
}

/// Delete a maintenance schedule; requires the admin password
#[utoipa::path(
    delete,
    path = "/maintenance-schedules/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Schedule ID"), AdminDeleteParams),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 403, description = "Invalid admin password", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_schedule(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AdminDeleteParams>,
) -> AppResult<StatusCode> {
    state.services.guard.require(params.password.as_deref())?;
    state.services.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
