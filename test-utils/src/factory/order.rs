//! Order factory for creating test pilotes order entities.
//!
//! Orders reference an existing customer and address; use
//! `factory::helpers::create_order_with_dependencies` when the test does not care about them.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let expired = OrderFactory::new(&db, customer.id, address.id)
///     .creation_date(Utc::now() - Duration::minutes(30))
///     .notified(false)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    address_id: i32,
    order_number: String,
    creation_date: DateTime<Utc>,
    notified: bool,
    pilotes_number: String,
    total: f64,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_number: `{id}` zero-padded to 10 digits
    /// - creation_date: now
    /// - notified: `false`
    /// - pilotes_number: `"FIVE"`
    /// - total: `5.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `customer_id` - ID of the customer placing the order
    /// - `address_id` - ID of the delivery address
    pub fn new(db: &'a DatabaseConnection, customer_id: i32, address_id: i32) -> Self {
        Self {
            db,
            customer_id,
            address_id,
            order_number: format!("{:010}", next_id()),
            creation_date: Utc::now(),
            notified: false,
            pilotes_number: "FIVE".to_string(),
            total: 5.0,
        }
    }

    pub fn order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = order_number.into();
        self
    }

    pub fn creation_date(mut self, creation_date: DateTime<Utc>) -> Self {
        self.creation_date = creation_date;
        self
    }

    pub fn notified(mut self, notified: bool) -> Self {
        self.notified = notified;
        self
    }

    /// Sets the stored pilotes number name (`FIVE`, `TEN` or `FIFTEEN`).
    pub fn pilotes_number(mut self, pilotes_number: impl Into<String>) -> Self {
        self.pilotes_number = pilotes_number.into();
        self
    }

    pub fn total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pilotes_order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pilotes_order::Model, DbErr> {
        entity::pilotes_order::ActiveModel {
            order_number: ActiveValue::Set(self.order_number),
            creation_date: ActiveValue::Set(self.creation_date),
            notified: ActiveValue::Set(self.notified),
            address_id: ActiveValue::Set(self.address_id),
            pilotes_number: ActiveValue::Set(self.pilotes_number),
            total: ActiveValue::Set(self.total),
            customer_id: ActiveValue::Set(self.customer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values for the given customer and address.
pub async fn create_order(
    db: &DatabaseConnection,
    customer_id: i32,
    address_id: i32,
) -> Result<entity::pilotes_order::Model, DbErr> {
    OrderFactory::new(db, customer_id, address_id).build().await
}
