//! Vendor endpoints for the admin dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::vendor::{CreateVendor, UpdateVendor, Vendor},
};

/// List vendors
#[utoipa::path(
    get,
    path = "/vendors",
    tag = "vendors",
    responses(
        (status = 200, description = "Vendor list", body = Vec<Vendor>)
    )
)]
pub async fn list_vendors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Vendor>>> {
    let vendors = state.services.vendors.list().await?;
    Ok(Json(vendors))
}

/// Create a vendor
#[utoipa::path(
    post,
    path = "/vendors",
    tag = "vendors",
    request_body = CreateVendor,
    responses(
        (status = 201, description = "Vendor created", body = Vendor)
    )
)]
pub async fn create_vendor(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateVendor>,
) -> AppResult<(StatusCode, Json<Vendor>)> {
    let vendor = state.services.vendors.create(&data).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// Partial update of a vendor
#[utoipa::path(
    patch,
    path = "/vendors/{id}",
    tag = "vendors",
    params(("id" = i32, Path, description = "Vendor ID")),
    request_body = UpdateVendor,
    responses(
        (status = 200, description = "Vendor updated", body = Vendor)
    )
)]
pub async fn update_vendor(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateVendor>,
) -> AppResult<Json<Vendor>> {
    let vendor = state.services.vendors.update(id, &data).await?;
    Ok(Json(vendor))
}

/// Delete a vendor
#[utoipa::path(
    delete,
    path = "/vendors/{id}",
    tag = "vendors",
    params(("id" = i32, Path, description = "Vendor ID")),
    responses(
        (status = 204, description = "Vendor deleted")
    )
)]
pub async fn delete_vendor(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.vendors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
