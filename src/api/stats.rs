//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::dashboard_stats::{DashboardStats, GuestPassStats},
};

/// Latest dashboard stats snapshot (all-zero default when none exists)
#[utoipa::path(
    get,
    path = "/dashboard-stats",
    tag = "stats",
    responses(
        (status = 200, description = "Latest snapshot", body = DashboardStats)
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.stats.dashboard_latest().await?;
    Ok(Json(stats))
}

/// Recompute the dashboard snapshot and return it
#[utoipa::path(
    post,
    path = "/dashboard-stats",
    tag = "stats",
    responses(
        (status = 200, description = "Refreshed snapshot", body = DashboardStats)
    )
)]
pub async fn refresh_dashboard_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardStats>> {
    let stats = state.services.stats.dashboard_refresh().await?;
    Ok(Json(stats))
}

/// Live guest-pass counters (today's visits, on-premises visitors, totals)
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Guest-pass counters", body = GuestPassStats)
    )
)]
pub async fn get_guestpass_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<GuestPassStats>> {
    let stats = state.services.stats.guestpass().await?;
    Ok(Json(stats))
}
