use std::time::Duration as StdDuration;

use crate::server::{
    config::{NotifierConfig, OrderConfig, WebhookConfig},
    service::order_notifier::{NotifyOutcome, OrderNotifierService},
};
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, webhook::WebhookReceiver};
use url::Url;


const API_KEY: &str = "notifier-api-key";

fn order_config() -> OrderConfig {
    OrderConfig {
        unit_price: 1.0,
        expiration_minutes: 5,
    }
}

fn notifier_config(url: &str) -> NotifierConfig {
    NotifierConfig {
        enabled: true,
        webhook: Some(WebhookConfig {
            url: Url::parse(url).unwrap(),
            api_key: API_KEY.to_string(),
            timeout: StdDuration::from_secs(5),
        }),
    }
}

/// Creates an order older than the expiration window.
async fn create_expired_order(
    db: &DatabaseConnection,
) -> Result<entity::pilotes_order::Model, DbErr> {
    let customer = factory::customer::create_customer(db).await?;
    let address = factory::address::create_address(db).await?;

    factory::order::OrderFactory::new(db, customer.id, address.id)
        .creation_date(Utc::now() - Duration::minutes(10))
        .build()
        .await
}

async fn is_notified(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let order = entity::prelude::PilotesOrder::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!("order {}", id)))?;

    Ok(order.notified)
}
