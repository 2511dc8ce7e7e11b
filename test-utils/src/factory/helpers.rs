//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order together with the customer and address it references.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((customer, address, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::address::Model,
        entity::pilotes_order::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let address = crate::factory::address::create_address(db).await?;
    let order = crate::factory::order::create_order(db, customer.id, address.id).await?;

    Ok((customer, address, order))
}

/// Creates an order for an existing customer, with a fresh address.
///
/// # Arguments
/// - `db` - Database connection
/// - `customer` - Customer entity the order belongs to
///
/// # Returns
/// - `Ok((address, order))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_for_customer(
    db: &DatabaseConnection,
    customer: &entity::customer::Model,
) -> Result<(entity::address::Model, entity::pilotes_order::Model), DbErr> {
    let address = crate::factory::address::create_address(db).await?;
    let order = crate::factory::order::create_order(db, customer.id, address.id).await?;

    Ok((address, order))
}
