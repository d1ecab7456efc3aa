//! API handlers and routers for the Grand City REST endpoints

pub mod auth;
pub mod client_access;
pub mod communications;
pub mod executives;
pub mod health;
pub mod live_updates;
pub mod maintenance;
pub mod openapi;
pub mod payments;
pub mod personnel;
pub mod photo_logs;
pub mod projects;
pub mod properties;
pub mod proxy;
pub mod settings;
pub mod stats;
pub mod vendors;
pub mod visitors;
pub mod visits;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
    routing::{any, delete, get, patch, post, put},
    Router,
};

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Extractor for the authenticated guest-pass user from a Bearer token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Access token required".to_string()))?;

        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::Authentication("Invalid or expired token".to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Password query parameter required by destructive admin deletes
#[derive(serde::Deserialize, utoipa::IntoParams)]
pub struct AdminDeleteParams {
    pub password: Option<String>,
}

/// Build the admin dashboard router: property-management CRUD plus the
/// reverse-proxy rewrites forwarding guest-pass paths to the other service
pub fn admin_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ready", get(health::readiness_check))
        // Properties
        .route("/properties", get(properties::list_properties))
        .route("/properties", post(properties::create_property))
        .route("/properties/:id", patch(properties::update_property))
        .route("/properties/:id", delete(properties::delete_property))
        // Maintenance schedules
        .route("/maintenance-schedules", get(maintenance::list_schedules))
        .route("/maintenance-schedules", post(maintenance::create_schedule))
        .route("/maintenance-schedules/:id", patch(maintenance::update_schedule))
        .route("/maintenance-schedules/:id", delete(maintenance::delete_schedule))
        // Vendors
        .route("/vendors", get(vendors::list_vendors))
        .route("/vendors", post(vendors::create_vendor))
        .route("/vendors/:id", patch(vendors::update_vendor))
        .route("/vendors/:id", delete(vendors::delete_vendor))
        // Payments
        .route("/payments", get(payments::list_payments))
        .route("/payments", post(payments::create_payment))
        .route("/payments/:id", patch(payments::update_payment))
        .route("/payments/:id", delete(payments::delete_payment))
        // Projects
        .route("/projects", get(projects::list_projects))
        .route("/projects", post(projects::create_project))
        .route("/projects/:id", patch(projects::update_project))
        .route("/projects/:id", delete(projects::delete_project))
        // Photo logs & comments
        .route("/photo-logs", get(photo_logs::list_photo_logs))
        .route("/photo-logs", post(photo_logs::create_photo_log))
        .route("/photo-logs/:id", delete(photo_logs::delete_photo_log))
        .route("/photo-logs/:id/comments", get(photo_logs::list_comments))
        .route("/photo-comments", post(photo_logs::create_comment))
        .route("/photo-comments/:id", delete(photo_logs::delete_comment))
        // Client access
        .route("/client-access", get(client_access::list_client_access))
        .route("/client-access", post(client_access::create_client_access))
        .route("/client-access/:id", patch(client_access::update_client_access))
        .route("/client-access/:id", delete(client_access::delete_client_access))
        // Communications
        .route("/communications", get(communications::list_communications))
        .route("/communications", post(communications::create_communication))
        .route("/communications/:id", patch(communications::update_communication))
        .route("/communications/:id", delete(communications::delete_communication))
        // Personnel directory (the dashboard's "users" route group)
        .route("/users", get(personnel::list_personnel))
        .route("/users", post(personnel::create_personnel))
        .route("/users/:id", patch(personnel::update_personnel))
        .route("/users/:id", delete(personnel::delete_personnel))
        // Dashboard stats snapshots
        .route("/dashboard-stats", get(stats::get_dashboard_stats))
        .route("/dashboard-stats", post(stats::refresh_dashboard_stats))
        // Guest-pass rewrites (mirrors the dashboard's proxy table)
        .route("/login", any(proxy::forward))
        .route("/logout", any(proxy::forward))
        .route("/auth/*path", any(proxy::forward))
        .route("/visits", any(proxy::forward))
        .route("/visits/*path", any(proxy::forward))
        .route("/executives", any(proxy::forward))
        .route("/executives/*path", any(proxy::forward))
        .route("/health", any(proxy::forward))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
}

/// Build the guest-pass router: visits, executives, auth, settings, SSE
pub fn guestpass_router(state: AppState) -> Router {
    let api = Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/auth/verify", get(auth::verify))
        // Visits
        .route("/visits", get(visits::list_visits))
        .route("/visits", post(visits::create_visit))
        .route("/visits/generate-code", get(visits::generate_code))
        .route("/visits/validate", post(visits::validate_visit))
        .route("/visits/:id", put(visits::update_visit))
        .route("/visits/:id", delete(visits::delete_visit))
        .route("/visits/:id/checkin", post(visits::checkin_visit))
        .route("/visits/:id/checkout", post(visits::checkout_visit))
        // Visitors
        .route("/visitors", get(visitors::list_visitors))
        .route("/visitors", post(visitors::create_visitor))
        .route("/visitors/:id", put(visitors::update_visitor))
        .route("/visitors/:id", delete(visitors::delete_visitor))
        // Executives
        .route("/executives", get(executives::list_executives))
        .route("/executives", post(executives::create_executive))
        .route("/executives/:id", put(executives::update_executive))
        .route("/executives/:id", delete(executives::deactivate_executive))
        // System settings
        .route("/settings", get(settings::list_settings))
        .route("/settings/:key", put(settings::update_setting))
        // Stats & live updates
        .route("/stats", get(stats::get_guestpass_stats))
        .route("/live-updates", get(live_updates::live_updates))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
}
