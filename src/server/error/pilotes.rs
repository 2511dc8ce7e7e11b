//! Domain error taxonomy of the order backend.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business rule violations reported to API callers.
///
/// Each variant carries a stable code, an HTTP status and a default message. Only
/// `InvalidInput` may replace the default message with a detail message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PilotesError {
    #[error("An unexpected error occurs")]
    UnexpectedError,

    #[error("Unauthorized access")]
    Unauthorized,

    /// Malformed request body or failed field validation.
    ///
    /// # Fields
    /// - Optional detail message replacing the default message
    #[error("{}", .0.as_deref().unwrap_or("One or more of the received parameter is not correct. Please check the input parameters and try again"))]
    InvalidInput(Option<String>),

    #[error("The address cannot be null")]
    AddressNull,

    #[error("The customer cannot be null")]
    CustomerNull,

    #[error("The customer email cannot be empty")]
    CustomerEmailEmpty,

    #[error("The requested customer does not exist")]
    CustomerNotFound,

    #[error("The order cannot be null")]
    OrderNull,

    #[error("The requested order does not exist")]
    OrderNotFound,

    #[error("The order number cannot be empty")]
    OrderNumberEmpty,

    #[error("The order has already been processed and cannot be updated anymore")]
    OrderExpired,

    #[error("The order customer cannot be changed")]
    OrderCustomerCannotBeChanged,
}

impl PilotesError {
    /// Builds an `InvalidInput` error from field validation messages.
    ///
    /// The detail reads `The validation failed for one or more parameters: a;b.`.
    pub fn validation_failed<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = messages
            .into_iter()
            .map(|m| m.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(";");

        let detail = if joined.is_empty() {
            "The validation failed for one or more parameters.".to_string()
        } else {
            format!("The validation failed for one or more parameters: {}.", joined)
        };

        Self::InvalidInput(Some(detail))
    }

    /// Stable identifier of the error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnexpectedError => "UNEXPECTED_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::AddressNull => "ADDRESS_NULL",
            Self::CustomerNull => "CUSTOMER_NULL",
            Self::CustomerEmailEmpty => "CUSTOMER_EMAIL_EMPTY",
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::OrderNull => "ORDER_NULL",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::OrderNumberEmpty => "ORDER_NUMBER_EMPTY",
            Self::OrderExpired => "ORDER_EXPIRED",
            Self::OrderCustomerCannotBeChanged => "ORDER_CUSTOMER_CANNOT_BE_CHANGED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnexpectedError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::CustomerNotFound | Self::OrderNotFound => StatusCode::NOT_FOUND,
            Self::OrderExpired | Self::OrderCustomerCannotBeChanged => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::InvalidInput(_)
            | Self::AddressNull
            | Self::CustomerNull
            | Self::CustomerEmailEmpty
            | Self::OrderNull
            | Self::OrderNumberEmpty => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for PilotesError {
    fn into_response(self) -> Response {
        let status = self.status();

        (status, Json(ErrorDto::new(status, self.to_string()))).into_response()
    }
}
