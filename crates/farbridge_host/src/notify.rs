//! Push-notification delivery.
//!
//! The bridge posts `{ fid, title, body }` to a server endpoint which fans
//! out to the user's client. Delivery is best-effort: the game is never told
//! whether a notification landed, so errors stop here with a log line.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while talking to the notification endpoint.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The HTTP request itself failed (DNS, TLS, connect, timeout).
    #[error("notification transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Body posted to the notification endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NotifyRequest {
    /// Recipient account identifier (decimal string).
    pub fid: String,
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

/// Outcome reported by the notification endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotifyStatus {
    /// 200 - delivered.
    Delivered,
    /// 429 - the user is rate-limited.
    RateLimited,
    /// Any other status; carries the response body text.
    Error(String),
}

/// Delivery seam so the dispatcher can run without a live endpoint.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one notification.
    async fn send(&self, request: &NotifyRequest) -> Result<NotifyStatus, NotifyError>;
}

/// Production notifier posting JSON to the configured endpoint.
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpNotifier {
    /// Creates a notifier for the given endpoint URL.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send(&self, request: &NotifyRequest) -> Result<NotifyStatus, NotifyError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!(fid = %request.fid, %status, "notification endpoint responded");

        Ok(match status.as_u16() {
            200 => NotifyStatus::Delivered,
            429 => NotifyStatus::RateLimited,
            _ => NotifyStatus::Error(response.text().await.unwrap_or_default()),
        })
    }
}
