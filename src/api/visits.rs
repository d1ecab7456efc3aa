//! Visit endpoints for the guest-pass API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::visit::{
        CreateVisit, UpdateVisit, ValidateVisit, ValidationResult, Visit, VisitCodePreview,
        VisitDetails,
    },
};

use super::AuthenticatedUser;

/// Mutation acknowledgment carrying the affected visit
#[derive(Serialize, ToSchema)]
pub struct VisitResponse {
    pub success: bool,
    pub visit: Visit,
}

/// List all visits with visitor and executive details
#[utoipa::path(
    get,
    path = "/visits",
    tag = "visits",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visit list", body = Vec<VisitDetails>)
    )
)]
pub async fn list_visits(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<VisitDetails>>> {
    let visits = state.services.visits.list().await?;
    Ok(Json(visits))
}

/// Create a visit, allocating the next visit code for the current year
#[utoipa::path(
    post,
    path = "/visits",
    tag = "visits",
    security(("bearer_auth" = [])),
    request_body = CreateVisit,
    responses(
        (status = 201, description = "Visit created", body = VisitDetails),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_visit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateVisit>,
) -> AppResult<(StatusCode, Json<VisitDetails>)> {
    let visit = state.services.visits.create(&data).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

/// Preview the next visit code without reserving it
#[utoipa::path(
    get,
    path = "/visits/generate-code",
    tag = "visits",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Next available code", body = VisitCodePreview)
    )
)]
pub async fn generate_code(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<VisitCodePreview>> {
    let preview = state.services.visits.next_code().await?;
    Ok(Json(preview))
}

/// Partial update of a visit (approvals, status changes)
#[utoipa::path(
    put,
    path = "/visits/{id}",
    tag = "visits",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Visit ID")),
    request_body = UpdateVisit,
    responses(
        (status = 200, description = "Visit updated", body = VisitResponse),
        (status = 404, description = "Visit not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_visit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateVisit>,
) -> AppResult<Json<VisitResponse>> {
    let visit = state.services.visits.update(id, &data).await?;
    Ok(Json(VisitResponse {
        success: true,
        visit,
    }))
}

/// Validate a pass code at the gate (public endpoint)
#[utoipa::path(
    post,
    path = "/visits/validate",
    tag = "visits",
    request_body = ValidateVisit,
    responses(
        (status = 200, description = "Validation verdict", body = ValidationResult),
        (status = 404, description = "Unknown code", body = crate::error::ErrorResponse)
    )
)]
pub async fn validate_visit(
    State(state): State<crate::AppState>,
    Json(data): Json<ValidateVisit>,
) -> AppResult<Json<ValidationResult>> {
    let code = data
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| crate::error::AppError::Validation("Code is required".to_string()))?;
    let result = state.services.visits.validate(code).await?;
    Ok(Json(result))
}

/// Check a visitor in
#[utoipa::path(
    post,
    path = "/visits/{id}/checkin",
    tag = "visits",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Visit ID")),
    responses(
        (status = 200, description = "Visitor checked in", body = VisitResponse)
    )
)]
pub async fn checkin_visit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VisitResponse>> {
    let visit = state.services.visits.checkin(id).await?;
    Ok(Json(VisitResponse {
        success: true,
        visit,
    }))
}

/// Check a visitor out
#[utoipa::path(
    post,
    path = "/visits/{id}/checkout",
    tag = "visits",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Visit ID")),
    responses(
        (status = 200, description = "Visitor checked out", body = VisitResponse)
    )
)]
pub async fn checkout_visit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VisitResponse>> {
    let visit = state.services.visits.checkout(id).await?;
    Ok(Json(VisitResponse {
        success: true,
        visit,
    }))
}

/// Delete a visit
#[utoipa::path(
    delete,
    path = "/visits/{id}",
    tag = "visits",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Visit ID")),
    responses(
        (status = 204, description = "Visit deleted")
    )
)]
pub async fn delete_visit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.visits.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
