//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and are
//! generic over `ConnectionTrait`, so services can run them either on the connection pool
//! or inside a `DatabaseTransaction`.

pub mod address;
pub mod customer;
pub mod order;
pub mod order_sequence;

#[cfg(test)]
mod test;
