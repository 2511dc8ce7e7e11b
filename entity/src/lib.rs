//! SeaORM entity definitions for the pilotes order store.

pub mod prelude;

pub mod address;
pub mod customer;
pub mod order_sequence;
pub mod pilotes_order;
