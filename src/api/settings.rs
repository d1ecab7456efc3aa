//! System settings endpoints for the guest-pass API

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::setting::{SystemSetting, UpdateSetting},
};

use super::AuthenticatedUser;

/// List all system settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Settings list", body = Vec<SystemSetting>)
    )
)]
pub async fn list_settings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<SystemSetting>>> {
    let settings = state.services.settings.list().await?;
    Ok(Json(settings))
}

/// Update one setting by key
#[utoipa::path(
    put,
    path = "/settings/{key}",
    tag = "settings",
    security(("bearer_auth" = [])),
    params(("key" = String, Path, description = "Setting key")),
    request_body = UpdateSetting,
    responses(
        (status = 200, description = "Setting updated", body = SystemSetting),
        (status = 404, description = "Unknown key", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_setting(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(key): Path<String>,
    Json(data): Json<UpdateSetting>,
) -> AppResult<Json<SystemSetting>> {
    let setting = state.services.settings.update(&key, &data).await?;
    Ok(Json(setting))
}
