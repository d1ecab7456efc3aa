//! Executive endpoints for the guest-pass API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::executive::{CreateExecutive, Executive, ExecutiveDetails, UpdateExecutive},
};

use super::AuthenticatedUser;

/// List active executives (public, used by the login screen)
#[utoipa::path(
    get,
    path = "/executives",
    tag = "executives",
    responses(
        (status = 200, description = "Active executives", body = Vec<ExecutiveDetails>)
    )
)]
pub async fn list_executives(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ExecutiveDetails>>> {
    let executives = state.services.executives.list_active().await?;
    Ok(Json(executives))
}

/// Create an executive profile
#[utoipa::path(
    post,
    path = "/executives",
    tag = "executives",
    security(("bearer_auth" = [])),
    request_body = CreateExecutive,
    responses(
        (status = 201, description = "Executive created", body = Executive)
    )
)]
pub async fn create_executive(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateExecutive>,
) -> AppResult<(StatusCode, Json<Executive>)> {
    let executive = state.services.executives.create(&data).await?;
    Ok((StatusCode::CREATED, Json(executive)))
}

/// Update an executive profile
#[utoipa::path(
    put,
    path = "/executives/{id}",
    tag = "executives",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Executive ID")),
    request_body = UpdateExecutive,
    responses(
        (status = 200, description = "Executive updated", body = Executive)
    )
)]
pub async fn update_executive(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateExecutive>,
) -> AppResult<Json<Executive>> {
    let executive = state.services.executives.update(id, &data).await?;
    Ok(Json(executive))
}

/// Deactivate an executive (soft delete)
#[utoipa::path(
    delete,
    path = "/executives/{id}",
    tag = "executives",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Executive ID")),
    responses(
        (status = 200, description = "Executive deactivated", body = Executive)
    )
)]
pub async fn deactivate_executive(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Executive>> {
    let executive = state.services.executives.deactivate(id).await?;
    Ok(Json(executive))
}
