//! Communication endpoints for the admin dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::communication::{Communication, CreateCommunication, UpdateCommunication},
};

/// List communications
#[utoipa::path(
    get,
    path = "/communications",
    tag = "communications",
    responses(
        (status = 200, description = "Communication list", body = Vec<Communication>)
    )
)]
pub async fn list_communications(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Communication>>> {
    let records = state.services.communications.list().await?;
    Ok(Json(records))
}

/// Create a communication entry
#[utoipa::path(
    post,
    path = "/communications",
    tag = "communications",
    request_body = CreateCommunication,
    responses(
        (status = 201, description = "Communication created", body = Communication),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_communication(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCommunication>,
) -> AppResult<(StatusCode, Json<Communication>)> {
    let record = state.services.communications.create(&data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Update the unread counter of a communication
#[utoipa::path(
    patch,
    path = "/communications/{id}",
    tag = "communications",
    params(("id" = i32, Path, description = "Communication ID")),
    request_body = UpdateCommunication,
    responses(
        (status = 200, description = "Communication updated", body = Communication)
    )
)]
pub async fn update_communication(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateCommunication>,
) -> AppResult<Json<Communication>> {
    let record = state.services.communications.update(id, &data).await?;
    Ok(Json(record))
}

/// Delete a communication entry
#[utoipa::path(
    delete,
    path = "/communications/{id}",
    tag = "communications",
    params(("id" = i32, Path, description = "Communication ID")),
    responses(
        (status = 204, description = "Communication deleted")
    )
)]
pub async fn delete_communication(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.communications.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
