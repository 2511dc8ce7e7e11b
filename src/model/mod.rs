//! Wire-level data transfer objects.
//!
//! These types define the JSON shape of every request and response body. They carry
//! `utoipa::ToSchema` derives for the OpenAPI document and expose `validate()` functions
//! reporting field-level problems before a request reaches the service layer.

pub mod address;
pub mod api;
pub mod customer;
pub mod order;

/// Maximum length of every persisted text field.
pub const MAX_FIELD_LENGTH: usize = 250;
