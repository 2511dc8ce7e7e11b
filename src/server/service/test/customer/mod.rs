use crate::server::{
    error::{pilotes::PilotesError, AppError},
    service::customer::CustomerService,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_email;
