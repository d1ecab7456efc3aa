//! Personnel directory endpoints (the dashboard's "users" route group)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::personnel::{CreatePersonnel, Personnel, UpdatePersonnel},
};

/// List personnel
#[utoipa::path(
    get,
    path = "/users",
    tag = "personnel",
    responses(
        (status = 200, description = "Personnel list", body = Vec<Personnel>)
    )
)]
pub async fn list_personnel(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Personnel>>> {
    let personnel = state.services.personnel.list().await?;
    Ok(Json(personnel))
}

/// Create a personnel record
#[utoipa::path(
    post,
    path = "/users",
    tag = "personnel",
    request_body = CreatePersonnel,
    responses(
        (status = 201, description = "Personnel created", body = Personnel),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_personnel(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePersonnel>,
) -> AppResult<(StatusCode, Json<Personnel>)> {
    let person = state.services.personnel.create(&data).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// Partial update of a personnel record
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "personnel",
    params(("id" = i32, Path, description = "Personnel ID")),
    request_body = UpdatePersonnel,
    responses(
        (status = 200, description = "Personnel updated", body = Personnel),
        (status = 404, description = "Personnel not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_personnel(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePersonnel>,
) -> AppResult<Json<Personnel>> {
    let person = state.services.personnel.update(id, &data).await?;
    Ok(Json(person))
}

/// Delete a personnel record
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "personnel",
    params(("id" = i32, Path, description = "Personnel ID")),
    responses(
        (status = 204, description = "Personnel deleted")
    )
)]
pub async fn delete_personnel(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.personnel.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
