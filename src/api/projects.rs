//! Project endpoints for the admin dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::project::{CreateProject, Project, UpdateProject},
};

/// List projects
#[utoipa::path(
    get,
    path = "/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Project list", body = Vec<Project>)
    )
)]
pub async fn list_projects(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.services.projects.list().await?;
    Ok(Json(projects))
}

/// Create a project
#[utoipa::path(
    post,
    path = "/projects",
    tag = "projects",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = Project)
    )
)]
pub async fn create_project(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.services.projects.create(&data).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Update a project's progress and status
#[utoipa::path(
    patch,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProject,
    responses(
        (status = 200, description = "Project updated", body = Project)
    )
)]
pub async fn update_project(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = state.services.projects.update(id, &data).await?;
    Ok(Json(project))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted")
    )
)]
pub async fn delete_project(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
