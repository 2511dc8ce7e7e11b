use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    config::Config,
    error::AppError,
    service::order_notifier::{NotifyOutcome, OrderNotifierService},
};

const NOTIFY_INTERVAL: Duration = Duration::from_secs(60);

/// Starts the order notifier scheduler
///
/// Every minute, expired orders that were never notified are posted to the configured
/// webhook. A tick that fires while the previous one is still waiting on the webhook is
/// skipped.
///
/// # Arguments
/// - `db`: Database connection
/// - `http_client`: Client used for the webhook call
/// - `config`: Application configuration with the notifier and order sections
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, kept by the caller for shutdown
/// - `Err(AppError::SchedulerErr)` - Scheduler could not be created or started
pub async fn start_scheduler(
    db: DatabaseConnection,
    http_client: reqwest::Client,
    config: Arc<Config>,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let running = Arc::new(Mutex::new(()));

    let job = Job::new_repeated_async(NOTIFY_INTERVAL, move |_uuid, _lock| {
        let db = db.clone();
        let http_client = http_client.clone();
        let config = config.clone();
        let running = running.clone();

        Box::pin(async move {
            match run_tick(&running, &db, &http_client, &config).await {
                Some(Ok(outcome)) => tracing::debug!("Order notifier run finished: {:?}", outcome),
                Some(Err(e)) => tracing::error!("Error notifying orders: {}", e),
                None => tracing::warn!("Previous order notifier run still in progress, skipping"),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Order notifier scheduler started");

    Ok(scheduler)
}

/// Runs one notifier pass unless another pass holds `running`.
///
/// # Returns
/// - `None` - Skipped, a previous pass is still in progress
/// - `Some(result)` - Outcome of the pass
async fn run_tick(
    running: &Arc<Mutex<()>>,
    db: &DatabaseConnection,
    http_client: &reqwest::Client,
    config: &Config,
) -> Option<Result<NotifyOutcome, AppError>> {
    let _guard = running.clone().try_lock_owned().ok()?;

    Some(
        OrderNotifierService::new(db, http_client, &config.notifier, &config.order)
            .notify_orders()
            .await,
    )
}
