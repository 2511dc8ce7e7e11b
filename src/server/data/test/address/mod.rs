use crate::server::{
    data::address::AddressRepository,
    model::address::{AddressFilter, CreateAddressParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
