use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::MAX_FIELD_LENGTH;

/// Delivery address as exchanged over the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[schema(example = "785 Cabell Avenue", max_length = 250)]
    pub street: Option<String>,
    #[schema(example = "23219", max_length = 250)]
    pub postcode: Option<String>,
    #[schema(example = "Raccoon", max_length = 250)]
    pub city: Option<String>,
    #[schema(example = "USA", max_length = 250)]
    pub country: Option<String>,
}

impl AddressDto {
    /// Collects the validation messages for this address, in field order.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();

        check(
            &mut errors,
            &self.street,
            "the address's street cannot be empty",
            "the address's street max length is 250 characters",
        );
        check(
            &mut errors,
            &self.postcode,
            "the address's postal code cannot be empty",
            "the address's postal code max length is 250 characters",
        );
        check(
            &mut errors,
            &self.city,
            "the address's city cannot be empty",
            "the address's city max length is 250 characters",
        );
        check(
            &mut errors,
            &self.country,
            "the address's country cannot be empty",
            "the address's country max length is 250 characters",
        );

        errors
    }
}

fn check(
    errors: &mut Vec<&'static str>,
    value: &Option<String>,
    missing: &'static str,
    too_long: &'static str,
) {
    match value {
        None => errors.push(missing),
        Some(value) if value.trim().is_empty() => errors.push(missing),
        Some(value) if value.chars().count() > MAX_FIELD_LENGTH => errors.push(too_long),
        Some(_) => {}
    }
}
