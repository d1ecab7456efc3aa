//! Payment endpoints for the admin dashboard

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::payment::{CreatePayment, Payment, UpdatePayment},
};

/// List payments
#[utoipa::path(
    get,
    path = "/payments",
    tag = "payments",
    responses(
        (status = 200, description = "Payment list", body = Vec<Payment>)
    )
)]
pub async fn list_payments(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Payment>>> {
    let payments = state.services.payments.list().await?;
    Ok(Json(payments))
}

/// Create a payment
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = CreatePayment,
    responses(
        (status = 201, description = "Payment created", body = Payment),
        (status = 400, description = "Missing required field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_payment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePayment>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = state.services.payments.create(&data).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Update a payment's status
#[utoipa::path(
    patch,
    path = "/payments/{id}",
    tag = "payments",
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePayment,
    responses(
        (status = 200, description = "Payment updated", body = Payment)
    )
)]
pub async fn update_payment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdatePayment>,
) -> AppResult<Json<Payment>> {
    let payment = state.services.payments.update(id, &data).await?;
    Ok(Json(payment))
}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/payments/{id}",
    tag = "payments",
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 204, description = "Payment deleted")
    )
)]
pub async fn delete_payment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.payments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
