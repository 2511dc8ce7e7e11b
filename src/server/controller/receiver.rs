use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};

use crate::{
    model::{api::ErrorDto, order::OrderDto},
    server::error::{pilotes::PilotesError, AppError},
};

/// Tag for the local stand-in of the order-processing service
pub static RECEIVER_TAG: &str = "Receiver";

/// Accept a batch of expired orders.
///
/// Stands in for the downstream order-processing service so the notifier can be pointed
/// at this server. Only logs how many orders arrived.
#[utoipa::path(
    post,
    path = "/prepareOrders",
    tag = RECEIVER_TAG,
    request_body = Vec<OrderDto>,
    responses(
        (status = 200, description = "Orders received"),
        (status = 400, description = "Invalid order list", body = ErrorDto)
    ),
)]
pub async fn prepare_orders(
    payload: Result<Json<Vec<OrderDto>>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(orders) = payload.map_err(PilotesError::from)?;

    tracing::info!("Received {} orders", orders.len());

    Ok(StatusCode::OK)
}
