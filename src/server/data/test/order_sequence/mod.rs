use crate::server::data::order_sequence::{OrderSequenceRepository, INITIAL_VALUE};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::builder::TestBuilder;
