//! Photo log and photo comment endpoints for the admin dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::photo_log::{CreatePhotoComment, CreatePhotoLog, PhotoComment, PhotoLog},
};

/// List photo logs
#[utoipa::path(
    get,
    path = "/photo-logs",
    tag = "photo-logs",
    responses(
        (status = 200, description = "Photo log list", body = Vec<PhotoLog>)
    )
)]
pub async fn list_photo_logs(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PhotoLog>>> {
    let logs = state.services.photo_logs.list().await?;
    Ok(Json(logs))
}

/// Create a photo log
#[utoipa::path(
    post,
    path = "/photo-logs",
    tag = "photo-logs",
    request_body = CreatePhotoLog,
    responses(
        (status = 201, description = "Photo log created", body = PhotoLog)
    )
)]
pub async fn create_photo_log(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePhotoLog>,
) -> AppResult<(StatusCode, Json<PhotoLog>)> {
    let log = state.services.photo_logs.create(&data).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// Delete a photo log (its comments cascade)
#[utoipa::path(
    delete,
    path = "/photo-logs/{id}",
    tag = "photo-logs",
    params(("id" = i32, Path, description = "Photo log ID")),
    responses(
        (status = 204, description = "Photo log deleted")
    )
)]
pub async fn delete_photo_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.photo_logs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List comments for one photo log
#[utoipa::path(
    get,
    path = "/photo-logs/{id}/comments",
    tag = "photo-logs",
    params(("id" = i32, Path, description = "Photo log ID")),
    responses(
        (status = 200, description = "Comment list", body = Vec<PhotoComment>)
    )
)]
pub async fn list_comments(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<PhotoComment>>> {
    let comments = state.services.photo_logs.list_comments(id).await?;
    Ok(Json(comments))
}

/// Add a comment to a photo log
#[utoipa::path(
    post,
    path = "/photo-comments",
    tag = "photo-logs",
    request_body = CreatePhotoComment,
    responses(
        (status = 201, description = "Comment created", body = PhotoComment),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_comment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePhotoComment>,
) -> AppResult<(StatusCode, Json<PhotoComment>)> {
    let comment = state.services.photo_logs.create_comment(&data).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/photo-comments/{id}",
    tag = "photo-logs",
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Comment deleted")
    )
)]
pub async fn delete_comment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.photo_logs.delete_comment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
