//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships through the
//! `helpers` module, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let customer = factory::customer::create_customer(&db).await?;
//!
//!     // Create with all dependencies
//!     let (customer, address, order) = factory::helpers::create_order_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let customer = factory::customer::CustomerFactory::new(&db)
//!     .email("ada@example.com")
//!     .first_name("Ada")
//!     .build()
//!     .await?;
//!
//! let order = factory::order::OrderFactory::new(&db, customer.id, address.id)
//!     .creation_date(Utc::now() - Duration::minutes(10))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `customer` - Create customer entities
//! - `address` - Create address entities
//! - `order` - Create pilotes order entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod address;
pub mod customer;
pub mod helpers;
pub mod order;

pub use address::create_address;
pub use customer::create_customer;
pub use order::create_order;
