//! Visitor endpoints for the guest-pass API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::visitor::{CreateVisitor, UpdateVisitor, Visitor},
};

use super::AuthenticatedUser;

/// List visitors, newest first
#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visitor list", body = Vec<Visitor>)
    )
)]
pub async fn list_visitors(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Visitor>>> {
    let visitors = state.services.visitors.list().await?;
    Ok(Json(visitors))
}

/// Create a visitor record directly
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    security(("bearer_auth" = [])),
    request_body = CreateVisitor,
    responses(
        (status = 201, description = "Visitor created", body = Visitor),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateVisitor>,
) -> AppResult<(StatusCode, Json<Visitor>)> {
    let visitor = state.services.visitors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(visitor)))
}

/// Partial update of a visitor
#[utoipa::path(
    put,
    path = "/visitors/{id}",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Visitor ID")),
    request_body = UpdateVisitor,
    responses(
        (status = 200, description = "Visitor updated", body = Visitor),
        (status = 404, description = "Visitor not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateVisitor>,
) -> AppResult<Json<Visitor>> {
    let visitor = state.services.visitors.update(id, &data).await?;
    Ok(Json(visitor))
}

/// Delete a visitor
#[utoipa::path(
    delete,
    path = "/visitors/{id}",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Visitor ID")),
    responses(
        (status = 204, description = "Visitor deleted")
    )
)]
pub async fn delete_visitor(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.visitors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
