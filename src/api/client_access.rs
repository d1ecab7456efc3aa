//! Client access endpoints for the admin dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::client_access::{ClientAccess, CreateClientAccess, UpdateClientAccess},
};

/// List client access records
#[utoipa::path(
    get,
    path = "/client-access",
    tag = "client-access",
    responses(
        (status = 200, description = "Client access list", body = Vec<ClientAccess>)
    )
)]
pub async fn list_client_access(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ClientAccess>>> {
    let records = state.services.client_access.list().await?;
    Ok(Json(records))
}

/// Create a client access record
#[utoipa::path(
    post,
    path = "/client-access",
    tag = "client-access",
    request_body = CreateClientAccess,
    responses(
        (status = 201, description = "Client access created", body = ClientAccess)
    )
)]
pub async fn create_client_access(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateClientAccess>,
) -> AppResult<(StatusCode, Json<ClientAccess>)> {
    let record = state.services.client_access.create(&data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Partial update of a client access record (including the notification toggle)
#[utoipa::path(
    patch,
    path = "/client-access/{id}",
    tag = "client-access",
    params(("id" = i32, Path, description = "Client access ID")),
    request_body = UpdateClientAccess,
    responses(
        (status = 200, description = "Client access updated", body = ClientAccess)
    )
)]
pub async fn update_client_access(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateClientAccess>,
) -> AppResult<Json<ClientAccess>> {
    let record = state.services.client_access.update(id, &data).await?;
    Ok(Json(record))
}

/// Delete a client access record
#[utoipa::path(
    delete,
    path = "/client-access/{id}",
    tag = "client-access",
    params(("id" = i32, Path, description = "Client access ID")),
    responses(
        (status = 204, description = "Client access deleted")
    )
)]
pub async fn delete_client_access(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.client_access.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
