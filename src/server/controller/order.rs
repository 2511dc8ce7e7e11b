use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, customer::CustomerDto, order::OrderDto},
    server::{
        error::{pilotes::PilotesError, AppError},
        model::{customer::CustomerFilter, order::OrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "Order";

/// Get an order by its number.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `number` - 10 digit order number
///
/// # Returns
/// - `200 OK` - The order with its delivery address and customer
/// - `404 Not Found` - No order has this number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1.0/orders/{number}",
    tag = ORDER_TAG,
    params(
        ("number" = String, Path, description = "Order number")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderDto),
        (status = 404, description = "The requested order does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db, &state.config.order)
        .get(Some(&number))
        .await?
        .ok_or(PilotesError::OrderNotFound)?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Save a new order and return its number.
///
/// The order number, creation date and total of the payload are ignored; the customer is
/// looked up by email and the delivery address reused when an identical one exists.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Order to save
///
/// # Returns
/// - `200 OK` - Generated order number as plain text
/// - `400 Bad Request` - Invalid payload, missing customer, email or address
/// - `404 Not Found` - No customer has the given email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1.0/orders",
    tag = ORDER_TAG,
    request_body = OrderDto,
    responses(
        (status = 200, description = "Order saved with success", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 404, description = "The requested customer does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Option<OrderDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(PilotesError::from)?;
    let params = payload.map(OrderParams::from_dto).transpose()?;

    let order_number = OrderService::new(&state.db, &state.config.order)
        .save(params)
        .await?;

    Ok((StatusCode::OK, order_number))
}

/// Update an existing order and return its number.
///
/// Only the delivery address and the pilotes number change; the customer must stay the
/// same and the order must still be inside its mutability window.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Order to update, identified by its `orderNumber`
///
/// # Returns
/// - `200 OK` - Order number as plain text
/// - `400 Bad Request` - Invalid payload or missing order number
/// - `404 Not Found` - Unknown order or customer
/// - `422 Unprocessable Entity` - Order expired or customer changed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/v1.0/orders",
    tag = ORDER_TAG,
    request_body = OrderDto,
    responses(
        (status = 200, description = "Order updated with success", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid order", body = ErrorDto),
        (status = 404, description = "The requested order or customer does not exist", body = ErrorDto),
        (status = 422, description = "The order cannot be updated anymore", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    payload: Result<Json<Option<OrderDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(PilotesError::from)?;
    let params = payload.map(OrderParams::from_dto).transpose()?;

    let order_number = OrderService::new(&state.db, &state.config.order)
        .update(params)
        .await?;

    Ok((StatusCode::OK, order_number))
}

/// Search orders by partial customer fields.
///
/// Every set field of the filter must be contained in the matching customer field, so
/// `{"email": ".com"}` returns the orders of every customer whose email contains `.com`.
///
/// # Access Control
/// - Bearer token with the `SEARCH` authority, enforced by the route layer
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Customer filter
///
/// # Returns
/// - `200 OK` - Matching orders, possibly empty
/// - `400 Bad Request` - Invalid or null filter
/// - `401 Unauthorized` - Missing, invalid or insufficient token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1.0/orders/searchByCustomer",
    tag = ORDER_TAG,
    request_body = CustomerDto,
    responses(
        (status = 200, description = "The orders of the matching customers", body = Vec<OrderDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Unauthorized access", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn search_by_customer(
    State(state): State<AppState>,
    payload: Result<Json<Option<CustomerDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(PilotesError::from)?;

    let orders = OrderService::new(&state.db, &state.config.order)
        .search_by_customer(payload.map(CustomerFilter::from))
        .await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(|order| order.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
