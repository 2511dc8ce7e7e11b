//! Customer domain models and parameters.

use crate::model::customer::CustomerDto;

/// Stored customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub telephone: String,
    pub email: String,
}

impl Customer {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            telephone: entity.telephone,
            email: entity.email,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            first_name: Some(self.first_name),
            last_name: Some(self.last_name),
            telephone: Some(self.telephone),
            email: Some(self.email),
        }
    }
}

/// Customer filter and order customer reference.
///
/// As a search filter every field left `None` is unconstrained and set fields are
/// matched as case-sensitive substrings. As the customer of an order only `email` is
/// used, to identify an existing customer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

impl From<CustomerDto> for CustomerFilter {
    fn from(dto: CustomerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            telephone: dto.telephone,
            email: dto.email,
        }
    }
}
