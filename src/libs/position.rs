//! Recurring device position subscription.
//!
//! Field devices expose their GPS fix through a local companion endpoint
//! that answers a JSON `{ "latitude": .., "longitude": .. }` payload. The
//! watch polls it on an interval and delivers samples over a channel; the
//! subscription is cancelled by dropping the watch, which aborts the
//! polling task along with it.
//!
//! Position errors are delivered to the consumer as values rather than
//! terminating the watch: inability to sample position is informational
//! and must never end a session by itself.

use crate::libs::geo::Position;
use chrono::Local;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("position request timed out")]
    Timeout,
    #[error("position source unavailable: {0}")]
    Unavailable(String),
    #[error("malformed position payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct PositionPayload {
    latitude: f64,
    longitude: f64,
}

/// HTTP poller for the device's position endpoint.
pub struct HttpPositionSource {
    client: reqwest::Client,
    url: String,
}

impl HttpPositionSource {
    /// `timeout_secs` bounds each individual position request.
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, PositionError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| PositionError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Requests one position fix, stamped with the local capture time.
    pub async fn sample(&self) -> Result<Position, PositionError> {
        let res = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                PositionError::Timeout
            } else {
                PositionError::Unavailable(e.to_string())
            }
        })?;
        let body = res.text().await.map_err(|e| PositionError::Unavailable(e.to_string()))?;
        let payload: PositionPayload = serde_json::from_str(&body)?;
        Ok(Position::new(payload.latitude, payload.longitude, Local::now().naive_local()))
    }
}

/// A live, cancellable position subscription.
///
/// Dropping the watch releases the subscription: the polling task is
/// aborted and no further samples are produced.
pub struct PositionWatch {
    rx: mpsc::Receiver<Result<Position, PositionError>>,
    task: Option<JoinHandle<()>>,
}

impl PositionWatch {
    /// Spawns a polling task over `source`, sampling once per `interval`.
    pub fn spawn(source: HttpPositionSource, interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel(16);
        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            loop {
                ticker.tick().await;
                if tx.send(source.sample().await).await.is_err() {
                    break; // receiver gone, stop polling
                }
            }
        });
        Self { rx, task: Some(task) }
    }

    /// Wraps an externally fed channel. Used by alternative sources and tests.
    pub fn from_channel(rx: mpsc::Receiver<Result<Position, PositionError>>) -> Self {
        Self { rx, task: None }
    }

    /// A watch with no source behind it; `recv` yields `None` immediately.
    pub fn disconnected() -> Self {
        let (_, rx) = mpsc::channel(1);
        Self { rx, task: None }
    }

    pub async fn recv(&mut self) -> Option<Result<Position, PositionError>> {
        self.rx.recv().await
    }
}

impl Drop for PositionWatch {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
