mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, scheduler::order_notifier, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Arc::new(Config::from_env()?);

    let db = startup::connect_to_database(&config).await?;

    let mut scheduler = if config.notifier.enabled {
        let http_client = startup::setup_reqwest_client()?;
        Some(order_notifier::start_scheduler(db.clone(), http_client, config.clone()).await?)
    } else {
        tracing::info!("Order notifier disabled");
        None
    };

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", listener.local_addr()?);

    let app = router::router(AppState::new(db, config.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("Server stopped");

    Ok(())
}
