//! Authentication endpoints for the guest-pass API

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{LoginRequest, LoginResponse, UserInfo},
};

use super::AuthenticatedUser;

/// Logout acknowledgment
#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Token verification response
#[derive(Serialize, ToSchema)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: UserInfo,
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse),
        (status = 403, description = "Account disabled or locked", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(data): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password) = match (&data.email, &data.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AppError::Validation(
                "Email and password are required".to_string(),
            ))
        }
    };
    data.validate()?;

    let response = state.services.auth.login(email, password).await?;
    Ok(Json(response))
}

/// Log out (token removal happens client side; this just acknowledges)
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = LogoutResponse)
    )
)]
pub async fn logout(AuthenticatedUser(_claims): AuthenticatedUser) -> Json<LogoutResponse> {
    Json(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    })
}

/// Check whether the current token is valid
#[utoipa::path(
    get,
    path = "/auth/verify",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponse)
    )
)]
pub async fn verify(AuthenticatedUser(claims): AuthenticatedUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        valid: true,
        user: claims.user_info(),
    })
}
