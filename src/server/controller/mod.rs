pub mod auth;
pub mod order;
pub mod receiver;

use axum::extract::rejection::{JsonRejection, QueryRejection};

use crate::server::error::pilotes::PilotesError;

impl From<JsonRejection> for PilotesError {
    fn from(rejection: JsonRejection) -> Self {
        PilotesError::InvalidInput(Some(rejection.body_text()))
    }
}

impl From<QueryRejection> for PilotesError {
    fn from(rejection: QueryRejection) -> Self {
        PilotesError::InvalidInput(Some(rejection.body_text()))
    }
}
