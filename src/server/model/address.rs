//! Address domain models and parameters.

use crate::model::address::AddressDto;

/// Stored delivery address.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}

impl Address {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            street: entity.street,
            postcode: entity.postcode,
            city: entity.city,
            country: entity.country,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            street: Some(self.street),
            postcode: Some(self.postcode),
            city: Some(self.city),
            country: Some(self.country),
        }
    }
}

/// Example-based address filter.
///
/// Every field left `None` is unconstrained; set fields must match exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressFilter {
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Parameters for persisting a new address.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAddressParams {
    pub street: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}

impl CreateAddressParams {
    /// Converts a validated DTO into creation parameters.
    ///
    /// # Returns
    /// - `Some(CreateAddressParams)` - Every field was present
    /// - `None` - At least one field was missing
    pub fn from_dto(dto: AddressDto) -> Option<Self> {
        Some(Self {
            street: dto.street?,
            postcode: dto.postcode?,
            city: dto.city?,
            country: dto.country?,
        })
    }

    /// Filter matching exactly this address.
    pub fn to_filter(&self) -> AddressFilter {
        AddressFilter {
            street: Some(self.street.clone()),
            postcode: Some(self.postcode.clone()),
            city: Some(self.city.clone()),
            country: Some(self.country.clone()),
        }
    }
}
