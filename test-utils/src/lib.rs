//! Pilotes Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for the pilotes
//! order backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for seeding rows, and a recording webhook receiver standing in
//! for the downstream order-processing service.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders inserting customers, addresses and orders with sensible defaults
//! - **webhook**: Local HTTP receiver that records notifier requests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_order_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_order_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let customer = factory::customer::create_customer(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod webhook;
