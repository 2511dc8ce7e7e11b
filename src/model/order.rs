use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{address::AddressDto, customer::CustomerDto};

/// Number of pilotes in an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PilotesNumber {
    Five,
    Ten,
    Fifteen,
}

impl PilotesNumber {
    /// Number of pilotes the variant stands for.
    pub fn units(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
        }
    }

    /// Stored and serialized name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Five => "FIVE",
            Self::Ten => "TEN",
            Self::Fifteen => "FIFTEEN",
        }
    }
}

impl std::str::FromStr for PilotesNumber {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "FIVE" => Ok(Self::Five),
            "TEN" => Ok(Self::Ten),
            "FIFTEEN" => Ok(Self::Fifteen),
            other => Err(other.to_string()),
        }
    }
}

/// Order as exchanged over the API.
///
/// `orderNumber` is generated by the server and ignored on creation; `total` is always
/// recomputed and any incoming value is discarded.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[schema(example = "0001021648")]
    pub order_number: Option<String>,
    pub delivery_address: Option<AddressDto>,
    pub pilotes_number: Option<PilotesNumber>,
    #[schema(example = 15.0)]
    pub total: Option<f64>,
    pub customer: Option<CustomerDto>,
}

impl OrderDto {
    /// Collects the validation messages for this order, including the nested delivery
    /// address.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut errors = Vec::new();

        match &self.delivery_address {
            None => errors.push("the order's delivery address cannot be empty"),
            Some(address) => errors.extend(address.validate()),
        }

        if self.pilotes_number.is_none() {
            errors.push("the order's pilotes number cannot be empty");
        }

        if let Some(total) = self.total {
            if !is_valid_price(total) {
                errors.push("The order's total price can have 18 digits of which 2 are decimals");
            }
        }

        if self.customer.is_none() {
            errors.push("the order's customer cannot be empty");
        }

        errors
    }
}

/// At most 18 integer digits and 2 decimals.
fn is_valid_price(value: f64) -> bool {
    if !value.is_finite() || value.abs() >= 1e18 {
        return false;
    }

    let cents = value * 100.0;
    (cents - cents.round()).abs() < 1e-6
}
