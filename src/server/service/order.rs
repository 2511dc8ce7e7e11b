//! Order lifecycle: creation, time-boxed updates and customer search.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    config::OrderConfig,
    data::{order::OrderRepository, order_sequence::OrderSequenceRepository},
    error::{pilotes::PilotesError, AppError},
    model::{
        address::{Address, CreateAddressParams},
        customer::{Customer, CustomerFilter},
        order::{
            compute_total, format_order_number, NewOrder, Order, OrderChanges, OrderParams,
        },
    },
    service::{address::AddressService, customer::CustomerService},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    config: &'a OrderConfig,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a OrderConfig) -> Self {
        Self { db, config }
    }

    /// Gets an order by its order number
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Order found
    /// - `Ok(None)` - No order has this number
    /// - `Err(AppError::PilotesErr(OrderNumberEmpty))` - Number missing or blank
    pub async fn get(&self, order_number: Option<&str>) -> Result<Option<Order>, AppError> {
        find_order(self.db, order_number).await
    }

    /// Creates a new order and returns its generated order number.
    ///
    /// Allocates the order number, resolves the customer by email and the delivery
    /// address (reusing an identical stored address) and computes the total, all in one
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(String)` - The 10 digit order number
    /// - `Err(AppError::PilotesErr(_))` - `OrderNull`, `CustomerNull`, `CustomerEmailEmpty`,
    ///   `CustomerNotFound` or `AddressNull`
    /// - `Err(AppError::DbErr(_))` - Database error, nothing was persisted
    pub async fn save(&self, params: Option<OrderParams>) -> Result<String, AppError> {
        let params = params.ok_or(PilotesError::OrderNull)?;

        let txn = self.db.begin().await?;

        let sequence_value = OrderSequenceRepository::new(&txn).next_value().await?;
        let order_number = format_order_number(sequence_value);

        let customer = resolve_customer(&txn, params.customer.as_ref()).await?;
        let address = resolve_address(&txn, params.delivery_address).await?;

        let order = OrderRepository::new(&txn)
            .create(NewOrder {
                order_number,
                creation_date: Utc::now(),
                address_id: address.id,
                pilotes_number: params.pilotes_number,
                total: compute_total(params.pilotes_number, self.config.unit_price),
                customer_id: customer.id,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Saved a new order with id {} and number {}",
            order.id,
            order.order_number
        );

        Ok(order.order_number)
    }

    /// Updates the pilotes number and delivery address of an existing order.
    ///
    /// The order is located by `params.order_number`. Its customer cannot change and it
    /// must still be inside its mutability window. Creation date and customer are never
    /// altered; the total is recomputed.
    ///
    /// # Returns
    /// - `Ok(String)` - The order number of the updated order
    /// - `Err(AppError::PilotesErr(_))` - `OrderNull`, `OrderNumberEmpty`, `OrderNotFound`,
    ///   `CustomerNull`, `CustomerEmailEmpty`, `OrderCustomerCannotBeChanged`,
    ///   `OrderExpired`, `CustomerNotFound` or `AddressNull`
    pub async fn update(&self, params: Option<OrderParams>) -> Result<String, AppError> {
        let params = params.ok_or(PilotesError::OrderNull)?;

        let txn = self.db.begin().await?;

        let existing = find_order(&txn, params.order_number.as_deref())
            .await?
            .ok_or(PilotesError::OrderNotFound)?;

        let incoming_email = customer_email(params.customer.as_ref())?;
        if incoming_email != existing.customer.email {
            return Err(PilotesError::OrderCustomerCannotBeChanged.into());
        }

        let now = Utc::now();
        if existing.is_expired(now, self.config.expiration_minutes) {
            tracing::debug!(
                "Order {} created at {} expired {} minutes later, now is {}",
                existing.order_number,
                existing.creation_date,
                self.config.expiration_minutes,
                now
            );
            return Err(PilotesError::OrderExpired.into());
        }

        resolve_customer(&txn, params.customer.as_ref()).await?;
        let address = resolve_address(&txn, params.delivery_address).await?;

        OrderRepository::new(&txn)
            .update(
                existing.id,
                OrderChanges {
                    address_id: address.id,
                    pilotes_number: params.pilotes_number,
                    total: compute_total(params.pilotes_number, self.config.unit_price),
                },
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Updated order with id {} and number {}",
            existing.id,
            existing.order_number
        );

        Ok(existing.order_number)
    }

    /// Gets every order whose customer fields contain the set fields of `filter`
    pub async fn search_by_customer(
        &self,
        filter: Option<CustomerFilter>,
    ) -> Result<Vec<Order>, AppError> {
        let filter = filter.ok_or(PilotesError::CustomerNull)?;

        tracing::debug!("Searching orders for customer {:?}", filter);

        let orders = OrderRepository::new(self.db)
            .search_by_customer(&filter)
            .await?
            .into_iter()
            .map(Order::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Found {} orders", orders.len());

        Ok(orders)
    }
}

async fn find_order<C: ConnectionTrait>(
    db: &C,
    order_number: Option<&str>,
) -> Result<Option<Order>, AppError> {
    let order_number = match order_number {
        Some(number) if !number.trim().is_empty() => number,
        _ => return Err(PilotesError::OrderNumberEmpty.into()),
    };

    let order = OrderRepository::new(db).find_by_number(order_number).await?;

    Ok(order.map(Order::from_entity).transpose()?)
}

fn customer_email(customer: Option<&CustomerFilter>) -> Result<&str, PilotesError> {
    let customer = customer.ok_or(PilotesError::CustomerNull)?;

    match customer.email.as_deref() {
        Some(email) if !email.is_empty() => Ok(email),
        _ => Err(PilotesError::CustomerEmailEmpty),
    }
}

async fn resolve_customer<C: ConnectionTrait>(
    db: &C,
    customer: Option<&CustomerFilter>,
) -> Result<Customer, AppError> {
    let email = customer_email(customer)?;

    CustomerService::new(db)
        .get_by_email(Some(email))
        .await?
        .ok_or_else(|| PilotesError::CustomerNotFound.into())
}

async fn resolve_address<C: ConnectionTrait>(
    db: &C,
    address: Option<CreateAddressParams>,
) -> Result<Address, AppError> {
    AddressService::new(db).find_or_save(address).await
}
