//! Property endpoints for the admin dashboard

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::property::{
        CreateProperty, DeletedProperty, Property, PropertyWithCounts, UpdateProperty,
    },
};

use super::AdminDeleteParams;

/// List properties with maintenance and personnel counts
#[utoipa::path(
    get,
    path = "/properties",
    tag = "properties",
    responses(
        (status = 200, description = "Property list", body = Vec<PropertyWithCounts>)
    )
)]
pub async fn list_properties(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PropertyWithCounts>>> {
    let properties = state.services.properties.list().await?;
    Ok(Json(properties))
}

/// Create a property
#[utoipa::path(
    post,
    path = "/properties",
    tag = "properties",
    request_body = CreateProperty,
    responses(
        (status = 201, description = "Property created", body = Property),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_property(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = state.services.properties.create(&data).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Partial update of a property
#[utoipa::path(
    patch,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID")),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property updated", body = Property),
        (status = 404, description = "Property not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    let property = state.services.properties.update(id, &data).await?;
    Ok(Json(property))
}

/// Delete a property; requires the admin password
#[utoipa::path(
    delete,
    path = "/properties/{id}",
    tag = "properties",
    params(("id" = i32, Path, description = "Property ID"), AdminDeleteParams),
    responses(
        (status = 200, description = "Property deleted", body = DeletedProperty),
        (status = 403, description = "Invalid admin password", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_property(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AdminDeleteParams>,
) -> AppResult<Json<DeletedProperty>> {
    state.services.guard.require(params.password.as_deref())?;
    let property = state.services.properties.delete(id).await?;
    Ok(Json(DeletedProperty {
        message: "Property deleted successfully".to_string(),
        property,
    }))
}
