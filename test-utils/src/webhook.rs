//! Local HTTP receiver standing in for the downstream order-processing service.
//!
//! The receiver binds to an ephemeral port on the loopback interface, answers every
//! `POST /` with a fixed status code and records the JSON body together with the
//! `Authorization` header of each request so tests can assert on what was delivered.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::{net::TcpListener, sync::Mutex, task::JoinHandle};

use crate::error::TestError;

/// Request captured by the [`WebhookReceiver`].
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    /// Raw `Authorization` header value, if the request carried one.
    pub authorization: Option<String>,
    /// Request body parsed as JSON, `Value::Null` when the body was not valid JSON.
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct ReceiverState {
    status: StatusCode,
    delay: Duration,
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Recording webhook endpoint served on `127.0.0.1`.
///
/// The server task is aborted when the receiver is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let receiver = WebhookReceiver::start(StatusCode::OK).await?;
/// let url = receiver.url();
/// // ... run the notifier against `url`
/// assert_eq!(receiver.received().await.len(), 1);
/// ```
pub struct WebhookReceiver {
    address: std::net::SocketAddr,
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
    handle: JoinHandle<()>,
}

impl WebhookReceiver {
    /// Starts a receiver that answers every request with `status`.
    ///
    /// # Returns
    /// - `Ok(WebhookReceiver)` - Receiver bound and serving
    /// - `Err(TestError::Io)` - Failed to bind the loopback listener
    pub async fn start(status: StatusCode) -> Result<Self, TestError> {
        Self::start_delayed(status, Duration::ZERO).await
    }

    /// Starts a receiver that records each request, then waits `delay` before answering
    /// with `status`.
    ///
    /// Used to exercise client-side timeouts.
    pub async fn start_delayed(status: StatusCode, delay: Duration) -> Result<Self, TestError> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ReceiverState {
            status,
            delay,
            requests: requests.clone(),
        };

        let app = Router::new().route("/", post(record)).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            address,
            requests,
            handle,
        })
    }

    /// Base URL of the receiver, e.g. `http://127.0.0.1:53124/`.
    pub fn url(&self) -> String {
        format!("http://{}/", self.address)
    }

    /// Returns a snapshot of every request received so far.
    pub async fn received(&self) -> Vec<ReceivedRequest> {
        self.requests.lock().await.clone()
    }
}

impl Drop for WebhookReceiver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<ReceiverState>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

    state.requests.lock().await.push(ReceivedRequest {
        authorization,
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    state.status
}
