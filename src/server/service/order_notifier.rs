//! Forwarding of expired, unnotified orders to the downstream order-processing service.

use chrono::{Duration, Utc};
use reqwest::{header::AUTHORIZATION, StatusCode};
use sea_orm::DatabaseConnection;

use crate::{
    model::order::OrderDto,
    server::{
        config::{NotifierConfig, OrderConfig},
        data::order::OrderRepository,
        error::AppError,
        model::order::Order,
    },
};

/// Result of a single notifier run.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyOutcome {
    /// The notifier is turned off by configuration.
    Disabled,
    /// No order is past its mutability window and unnotified.
    NoPendingOrders,
    /// The webhook answered 200 and this many orders were marked notified.
    Delivered(usize),
    /// The webhook answered with another status; orders stay pending.
    Rejected(StatusCode),
    /// The webhook could not be reached or timed out; orders stay pending.
    Unreachable,
}

pub struct OrderNotifierService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    notifier: &'a NotifierConfig,
    order: &'a OrderConfig,
}

impl<'a> OrderNotifierService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        notifier: &'a NotifierConfig,
        order: &'a OrderConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            notifier,
            order,
        }
    }

    /// Sends every expired, unnotified order to the webhook in one request.
    ///
    /// Orders created more than `expiration_minutes` ago with `notified = false` are
    /// posted as a JSON array with the configured API key in the `Authorization` header.
    /// Only a 200 response marks the batch notified; any other response or a transport
    /// failure leaves the orders for the next run.
    ///
    /// The orders are read before the webhook call and flagged after it without a lock,
    /// so an order updated in between is delivered in its earlier state.
    ///
    /// # Returns
    /// - `Ok(NotifyOutcome)` - What the run did
    /// - `Err(AppError)` - Database error while loading or flagging orders
    pub async fn notify_orders(&self) -> Result<NotifyOutcome, AppError> {
        let webhook = match (&self.notifier.webhook, self.notifier.enabled) {
            (Some(webhook), true) => webhook,
            _ => {
                tracing::debug!("The orders notifier is disabled");
                return Ok(NotifyOutcome::Disabled);
            }
        };

        let cutoff = Utc::now() - Duration::minutes(self.order.expiration_minutes);

        let repo = OrderRepository::new(self.db);
        let pending = repo.find_pending(cutoff).await?;

        if pending.is_empty() {
            tracing::info!("No orders to notify found");
            return Ok(NotifyOutcome::NoPendingOrders);
        }

        tracing::info!("Found {} orders to notify", pending.len());

        let orders = pending
            .into_iter()
            .map(Order::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let order_numbers: Vec<String> = orders.iter().map(|o| o.order_number.clone()).collect();
        let payload: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

        let response = match self
            .http_client
            .post(webhook.url.clone())
            .header(AUTHORIZATION, webhook.api_key.as_str())
            .timeout(webhook.timeout)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Failed to send orders to {}: {}", webhook.url, e);
                return Ok(NotifyOutcome::Unreachable);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            tracing::info!(
                "Orders has not been sent: http status {} - message {}",
                status,
                message
            );
            return Ok(NotifyOutcome::Rejected(status));
        }

        tracing::info!("Sent {} orders with success", ids.len());
        tracing::debug!(
            "Setting notified flag to true for {}",
            order_numbers.join(", ")
        );

        let count = ids.len();
        repo.mark_notified(ids).await?;

        Ok(NotifyOutcome::Delivered(count))
    }
}
