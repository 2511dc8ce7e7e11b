//! Order domain models and parameters.
//!
//! Provides the `Order` aggregate returned by the service layer, the parameters accepted
//! by save and update, and the entity bundle produced by the order repository.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::order::{OrderDto, PilotesNumber},
    server::{
        error::{internal::InternalError, pilotes::PilotesError},
        model::{
            address::{Address, CreateAddressParams},
            customer::{Customer, CustomerFilter},
        },
    },
};

/// Order row together with the rows it references.
#[derive(Debug, Clone)]
pub struct OrderWithRelations {
    pub order: entity::pilotes_order::Model,
    pub address: entity::address::Model,
    pub customer: entity::customer::Model,
}

/// Order aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    /// Zero-padded 10 digit sequence value.
    pub order_number: String,
    pub creation_date: DateTime<Utc>,
    pub notified: bool,
    pub delivery_address: Address,
    pub pilotes_number: PilotesNumber,
    pub total: f64,
    pub customer: Customer,
}

impl Order {
    /// Converts the entity bundle to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - Successfully converted domain model
    /// - `Err(InternalError::UnknownPilotesNumber)` - The stored pilotes number is not a known variant
    pub fn from_entity(entity: OrderWithRelations) -> Result<Self, InternalError> {
        let OrderWithRelations {
            order,
            address,
            customer,
        } = entity;

        let pilotes_number = order.pilotes_number.parse::<PilotesNumber>().map_err(|value| {
            InternalError::UnknownPilotesNumber {
                order_number: order.order_number.clone(),
                value,
            }
        })?;

        Ok(Self {
            id: order.id,
            order_number: order.order_number,
            creation_date: order.creation_date,
            notified: order.notified,
            delivery_address: Address::from_entity(address),
            pilotes_number,
            total: order.total,
            customer: Customer::from_entity(customer),
        })
    }

    /// Converts domain model to DTO for API responses and webhook payloads.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            order_number: Some(self.order_number),
            delivery_address: Some(self.delivery_address.into_dto()),
            pilotes_number: Some(self.pilotes_number),
            total: Some(self.total),
            customer: Some(self.customer.into_dto()),
        }
    }

    /// Whether the mutability window of the order has passed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, expiration_minutes: i64) -> bool {
        now - self.creation_date > Duration::minutes(expiration_minutes)
    }
}

/// Parameters of order save and update.
///
/// `order_number` is ignored on save and identifies the order on update.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderParams {
    pub order_number: Option<String>,
    pub delivery_address: Option<CreateAddressParams>,
    pub pilotes_number: PilotesNumber,
    pub customer: Option<CustomerFilter>,
}

impl OrderParams {
    /// Validates a request DTO and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(OrderParams)` - DTO passed validation
    /// - `Err(PilotesError::InvalidInput)` - Validation failed, detail lists every failure
    pub fn from_dto(dto: OrderDto) -> Result<Self, PilotesError> {
        let errors = dto.validate();
        if !errors.is_empty() {
            return Err(PilotesError::validation_failed(errors));
        }

        let pilotes_number = dto.pilotes_number.ok_or_else(|| {
            PilotesError::validation_failed(["the order's pilotes number cannot be empty"])
        })?;

        Ok(Self {
            order_number: dto.order_number,
            delivery_address: dto.delivery_address.and_then(CreateAddressParams::from_dto),
            pilotes_number,
            customer: dto.customer.map(CustomerFilter::from),
        })
    }
}

/// Row values of a newly created order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub creation_date: DateTime<Utc>,
    pub address_id: i32,
    pub pilotes_number: PilotesNumber,
    pub total: f64,
    pub customer_id: i32,
}

/// Fields an update may change on an existing order.
#[derive(Debug, Clone)]
pub struct OrderChanges {
    pub address_id: i32,
    pub pilotes_number: PilotesNumber,
    pub total: f64,
}

/// Total price of `pilotes_number` pilotes, rounded to 2 decimals.
pub fn compute_total(pilotes_number: PilotesNumber, unit_price: f64) -> f64 {
    (pilotes_number.units() as f64 * unit_price * 100.0).round() / 100.0
}

/// Formats a sequence value as an order number.
pub fn format_order_number(value: i64) -> String {
    format!("{:010}", value)
}
